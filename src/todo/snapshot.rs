use super::task::TaskRef;

/// Immutable capture of the task list's membership and order
///
/// Holds a shallow copy: the handles are cloned, the tasks they point at are
/// not. Completing a task later is therefore visible in every snapshot that
/// still contains it.
#[derive(Debug, Clone)]
pub struct Snapshot {
    state: Vec<TaskRef>,
}

impl Snapshot {
    /// Capture a copy of the given sequence
    pub fn capture(tasks: &[TaskRef]) -> Self {
        Self {
            state: tasks.to_vec(),
        }
    }

    /// The captured sequence
    pub fn state(&self) -> &[TaskRef] {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Render the captured tasks as they look right now
    pub fn display(&self) -> Vec<String> {
        self.state.iter().map(TaskRef::display).collect()
    }

    pub(crate) fn into_state(self) -> Vec<TaskRef> {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::task::Task;

    #[test]
    fn test_capture_is_independent_of_source_vec() {
        let mut tasks = vec![TaskRef::new(Task::new("A"))];
        let snapshot = Snapshot::capture(&tasks);
        tasks.push(TaskRef::new(Task::new("B")));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.display(), vec!["A - Pending"]);
    }

    #[test]
    fn test_capture_shares_task_contents() {
        let task = TaskRef::new(Task::new("A"));
        let snapshot = Snapshot::capture(std::slice::from_ref(&task));
        task.borrow_mut().mark_completed();
        assert_eq!(snapshot.display(), vec!["A - Completed"]);
        assert!(snapshot.state()[0].ptr_eq(&task));
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::capture(&[]);
        assert!(snapshot.is_empty());
        assert!(snapshot.display().is_empty());
    }
}
