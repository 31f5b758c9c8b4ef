use crate::error::StoreResult;
use crate::model::command::{DisplaySelector, TaskIndex};
use crate::model::task::Task;

/// Storage contract the executor runs commands against.
///
/// Implementors provide the primitives; `find` and `display` are derived
/// from `list`.
pub trait TaskRepository {
    fn add(&mut self, task: Task) -> StoreResult<TaskIndex>;
    fn get(&self, index: TaskIndex) -> StoreResult<&Task>;
    fn mark_done(&mut self, index: TaskIndex) -> StoreResult<&Task>;
    fn delete(&mut self, index: TaskIndex) -> StoreResult<Task>;
    fn list(&self) -> Vec<(TaskIndex, &Task)>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn find(&self, keywords: &str) -> Vec<(TaskIndex, &Task)> {
        self.list()
            .into_iter()
            .filter(|(_, task)| task.matches_keywords(keywords))
            .collect()
    }

    fn display(&self, selector: &DisplaySelector) -> Vec<(TaskIndex, &Task)> {
        self.list()
            .into_iter()
            .filter(|(_, task)| selector.matches(task))
            .collect()
    }
}
