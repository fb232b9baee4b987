//! Read-only queries over a TaskList
//!
//! Lookup and filtered views. None of these touch the history stacks.

use super::task::{TaskFilter, TaskRef};
use super::task_list::TaskList;

impl TaskList {
    /// Tasks in insertion order
    pub fn tasks(&self) -> &[TaskRef] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Find the first task whose description matches exactly
    ///
    /// Descriptions are not unique; the earliest task in insertion order wins.
    pub fn find_by_description(&self, description: &str) -> Option<TaskRef> {
        self.tasks
            .iter()
            .find(|t| t.borrow().description == description)
            .cloned()
    }

    /// Render the tasks matching a filter name
    ///
    /// Accepts `all`, `completed` or `pending`; any other value behaves as `all`.
    pub fn view_tasks(&self, filter: &str) -> Vec<String> {
        self.view(TaskFilter::parse_lenient(filter))
    }

    /// Render the tasks matching a filter, in insertion order
    pub fn view(&self, filter: TaskFilter) -> Vec<String> {
        self.tasks
            .iter()
            .filter_map(|t| {
                let task = t.borrow();
                filter.matches(&task).then(|| task.display())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::todo::{Task, TaskList, TaskRef};

    fn sample() -> TaskList {
        let mut list = TaskList::new();
        for name in ["A", "B", "C"] {
            list.add_task(TaskRef::new(Task::new(name)));
        }
        let b = list.find_by_description("B").unwrap();
        list.mark_completed(&b);
        list
    }

    #[test]
    fn test_view_filters() {
        let list = sample();
        assert_eq!(
            list.view_tasks("all"),
            vec!["A - Pending", "B - Completed", "C - Pending"]
        );
        assert_eq!(list.view_tasks("completed"), vec!["B - Completed"]);
        assert_eq!(list.view_tasks("pending"), vec!["A - Pending", "C - Pending"]);
    }

    #[test]
    fn test_unknown_filter_behaves_as_all() {
        let list = sample();
        assert_eq!(list.view_tasks("whatever"), list.view_tasks("all"));
    }

    #[test]
    fn test_padded_filter_name_behaves_as_all() {
        let list = sample();
        let all = list.view_tasks("all");
        assert_eq!(list.view_tasks(" completed "), all);
        assert_eq!(list.view_tasks("pending\n"), all);
        assert_eq!(list.view_tasks("Completed"), all);
    }

    #[test]
    fn test_view_does_not_touch_history() {
        let list = sample();
        let depth = list.undo_depth();
        let _ = list.view_tasks("completed");
        assert_eq!(list.undo_depth(), depth);
        assert_eq!(list.redo_depth(), 0);
    }

    #[test]
    fn test_find_by_description_first_match() {
        let mut list = TaskList::new();
        let first = TaskRef::new(Task::new("Dup"));
        list.add_task(first.clone());
        list.add_task(TaskRef::new(Task::new("Dup")));
        let found = list.find_by_description("Dup").unwrap();
        assert!(found.ptr_eq(&first));
        assert!(list.find_by_description("dup").is_none());
    }
}
