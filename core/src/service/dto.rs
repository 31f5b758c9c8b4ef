use serde::{Deserialize, Serialize};

use crate::model::command::{DisplaySelector, TaskIndex};
use crate::model::task::Task;

/// A task together with the 1-based number the user sees.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
    pub number: usize,
    pub task: Task,
}

impl TaskEntry {
    pub fn from_entity(index: TaskIndex, task: &Task) -> Self {
        Self {
            number: index.one_based(),
            task: task.clone(),
        }
    }

    pub fn from_entities(entries: Vec<(TaskIndex, &Task)>) -> Vec<Self> {
        entries
            .into_iter()
            .map(|(index, task)| Self::from_entity(index, task))
            .collect()
    }
}

/// What happened when a command ran, for the presentation layer to render.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "response", rename_all = "snake_case")]
pub enum Response {
    Added { entry: TaskEntry, total: usize },
    MarkedDone { entry: TaskEntry },
    Deleted { entry: TaskEntry, remaining: usize },
    Listed { entries: Vec<TaskEntry> },
    Found { keywords: String, entries: Vec<TaskEntry> },
    Displayed { selector: DisplaySelector, entries: Vec<TaskEntry> },
}
