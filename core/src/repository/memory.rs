use crate::error::{StoreError, StoreResult};
use crate::model::command::TaskIndex;
use crate::model::task::Task;
use crate::repository::traits::TaskRepository;

/// Task list held in memory for the lifetime of the session.
#[derive(Debug, Default, Clone)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(&self, index: TaskIndex) -> StoreResult<usize> {
        let i = index.get();
        if i < self.tasks.len() {
            Ok(i)
        } else {
            Err(StoreError::IndexOutOfRange {
                index: i,
                len: self.tasks.len(),
            })
        }
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

impl TaskRepository for TaskList {
    fn add(&mut self, task: Task) -> StoreResult<TaskIndex> {
        self.tasks.push(task);
        Ok(TaskIndex::from_zero_based(self.tasks.len() - 1))
    }

    fn get(&self, index: TaskIndex) -> StoreResult<&Task> {
        let i = self.check(index)?;
        Ok(&self.tasks[i])
    }

    fn mark_done(&mut self, index: TaskIndex) -> StoreResult<&Task> {
        let i = self.check(index)?;
        let task = &mut self.tasks[i];
        task.mark_done();
        Ok(task)
    }

    fn delete(&mut self, index: TaskIndex) -> StoreResult<Task> {
        let i = self.check(index)?;
        Ok(self.tasks.remove(i))
    }

    fn list(&self) -> Vec<(TaskIndex, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, task)| (TaskIndex::from_zero_based(i), task))
            .collect()
    }

    fn len(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::command::DisplaySelector;
    use crate::model::task::{Deadline, Event, ToDo};
    use chrono::NaiveDate;

    fn sample() -> TaskList {
        [
            Task::new(ToDo::new("read CS2113 notes")),
            Task::new(Deadline::new("submit report ", "2 Dec 2024")),
            Task::new(Event::new("team sync ", "5 Jan 2025")),
        ]
        .into_iter()
        .collect()
    }

    fn idx(i: usize) -> TaskIndex {
        TaskIndex::from_zero_based(i)
    }

    #[test]
    fn test_add_returns_position() {
        let mut list = TaskList::new();
        assert!(list.is_empty());
        assert_eq!(list.add(Task::new(ToDo::new("a"))).unwrap(), idx(0));
        assert_eq!(list.add(Task::new(ToDo::new("b"))).unwrap(), idx(1));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_mark_done() {
        let mut list = sample();
        assert!(list.mark_done(idx(1)).unwrap().done);
        assert!(list.get(idx(1)).unwrap().done);
        assert!(!list.get(idx(0)).unwrap().done);
    }

    #[test]
    fn test_out_of_range() {
        let mut list = sample();
        let expected = StoreError::IndexOutOfRange { index: 3, len: 3 };
        assert_eq!(list.mark_done(idx(3)).unwrap_err(), expected);
        assert_eq!(list.delete(idx(3)).unwrap_err(), expected);
        assert_eq!(list.get(idx(3)).unwrap_err(), expected);
    }

    #[test]
    fn test_delete_shifts_positions() {
        let mut list = sample();
        let removed = list.delete(idx(0)).unwrap();
        assert_eq!(removed.description(), "read CS2113 notes");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(idx(0)).unwrap().description(), "submit report ");
    }

    #[test]
    fn test_find_keeps_original_positions() {
        let list = sample();
        let found = list.find("sync");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, idx(2));
        assert!(list.find("nothing like this").is_empty());
    }

    #[test]
    fn test_display_by_date_range() {
        let list = sample();
        let selector = DisplaySelector::ByDateRange {
            start: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        };
        let shown = list.display(&selector);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].0, idx(1));

        let by_module = DisplaySelector::ByModuleCode {
            code: "CS2113".to_string(),
        };
        assert_eq!(list.display(&by_module).len(), 1);
    }
}
