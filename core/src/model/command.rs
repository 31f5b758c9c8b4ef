use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::task::{Task, TaskKind};

/// 0-based position of a task in the list.
///
/// Users type 1-based numbers; conversion happens once, in the parser.
/// No bounds checking is done here, that is the repository's job.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TaskIndex(usize);

impl TaskIndex {
    pub fn from_zero_based(index: usize) -> Self {
        Self(index)
    }

    /// `None` for `0`, which has no 0-based counterpart.
    pub fn from_one_based(number: usize) -> Option<Self> {
        number.checked_sub(1).map(Self)
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

/// Which subset of tasks a `display` command shows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DisplaySelector {
    ByModuleCode { code: String },
    ByDate { date: NaiveDate },
    ByDateRange { start: NaiveDate, end: NaiveDate },
    ByModuleAndDate { code: String, date: NaiveDate },
}

impl DisplaySelector {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            DisplaySelector::ByModuleCode { code } => task.belongs_to_module(code),
            DisplaySelector::ByDate { date } => task.occurs_on(*date),
            DisplaySelector::ByDateRange { start, end } => task.occurs_between(*start, *end),
            DisplaySelector::ByModuleAndDate { code, date } => {
                task.belongs_to_module(code) && task.occurs_on(*date)
            }
        }
    }
}

/// A fully validated line of input, ready to be executed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Exit,
    List,
    Done { index: TaskIndex },
    Delete { index: TaskIndex },
    Find { keywords: String },
    Add { payload: TaskKind },
    Display { selector: DisplaySelector },
}
