use super::task::{Task, TaskRef};

/// Fluent constructor for [`Task`]
///
/// The description is mandatory and is not checked for emptiness; that is
/// left to the caller.
///
/// # Example
/// ```
/// use todo_history::TaskBuilder;
///
/// let task = TaskBuilder::new("Write report")
///     .due_date("2024-05-01")
///     .tags(vec!["work".to_string()])
///     .build();
/// assert_eq!(task.display(), "Write report - Pending, Due: 2024-05-01, Tags: work");
/// ```
#[derive(Debug, Clone)]
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            task: Task::new(description),
        }
    }

    /// Set the due date (stored as-is)
    pub fn due_date(mut self, due_date: impl Into<String>) -> Self {
        self.task.set_due_date(due_date);
        self
    }

    /// Replace the tags
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.task.set_tags(tags);
        self
    }

    /// Same as [`due_date`](Self::due_date)
    pub fn set_due_date(self, due_date: impl Into<String>) -> Self {
        self.due_date(due_date)
    }

    /// Same as [`tags`](Self::tags)
    pub fn set_tags(self, tags: Vec<String>) -> Self {
        self.tags(tags)
    }

    /// Set the due date only when one was given
    pub fn maybe_due_date(self, due_date: Option<String>) -> Self {
        match due_date {
            Some(date) => self.due_date(date),
            None => self,
        }
    }

    pub fn build(self) -> Task {
        self.task
    }

    /// Build the task and wrap it in a shared handle for a [`TaskList`](super::TaskList)
    pub fn build_shared(self) -> TaskRef {
        TaskRef::new(self.task)
    }
}
