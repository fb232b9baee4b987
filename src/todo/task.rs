use crate::validation;
use serde::Deserialize;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// A single to-do item
///
/// The description doubles as the user-facing identifier, but nothing
/// enforces uniqueness. Lookups resolve to the first match in list order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Task {
    /// What needs to be done
    pub description: String,
    /// Whether the task has been completed
    pub completed: bool,
    /// Optional due date (expected format: YYYY-MM-DD, not enforced)
    pub due_date: Option<String>,
    /// Free-form labels, in the order they were given
    pub tags: Vec<String>,
}

impl Task {
    /// Create a pending task with no due date and no tags
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn due_date(&self) -> Option<&str> {
        self.due_date.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Store a due date as-is
    ///
    /// Dates that do not look like `YYYY-MM-DD` are accepted anyway; a warning
    /// is logged so the oddity is at least visible with `--verbose`.
    pub fn set_due_date(&mut self, due_date: impl Into<String>) {
        let due_date = due_date.into();
        if !validation::is_iso_date(&due_date) {
            tracing::warn!(
                task = %self.description,
                due_date = %due_date,
                "due date is not in YYYY-MM-DD form, storing it unchanged"
            );
        }
        self.due_date = Some(due_date);
    }

    /// Replace the tag list wholesale
    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = tags;
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    pub fn mark_pending(&mut self) {
        self.completed = false;
    }

    /// Render the task as a single line
    ///
    /// Format: `<description> - <Completed|Pending>[, Due: <date>][, Tags: <t1, t2>]`
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.completed { "Completed" } else { "Pending" };
        write!(f, "{} - {}", self.description, status)?;
        if let Some(due) = self.due_date.as_deref()
            && !due.is_empty()
        {
            write!(f, ", Due: {}", due)?;
        }
        if !self.tags.is_empty() {
            write!(f, ", Tags: {}", self.tags.join(", "))?;
        }
        Ok(())
    }
}

/// Shared handle to a [`Task`]
///
/// The live list and every snapshot hold handles to the same task objects, so
/// a change made through one handle shows up through all of them. Equality is
/// identity: two handles are equal only if they point at the same task.
#[derive(Debug, Clone)]
pub struct TaskRef(Rc<RefCell<Task>>);

impl TaskRef {
    pub fn new(task: Task) -> Self {
        Self(Rc::new(RefCell::new(task)))
    }

    pub fn borrow(&self) -> Ref<'_, Task> {
        self.0.borrow()
    }

    /// Mutably borrow the task
    ///
    /// # Panics
    /// Panics if the task is already borrowed through any handle, e.g. a
    /// [`Ref`] from [`borrow`](Self::borrow) is still alive.
    pub fn borrow_mut(&self) -> RefMut<'_, Task> {
        self.0.borrow_mut()
    }

    /// True if both handles point at the same task
    pub fn ptr_eq(&self, other: &TaskRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn description(&self) -> String {
        self.borrow().description.clone()
    }

    pub fn is_completed(&self) -> bool {
        self.borrow().completed
    }

    pub fn display(&self) -> String {
        self.borrow().display()
    }
}

impl PartialEq for TaskRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for TaskRef {}

impl From<Task> for TaskRef {
    fn from(task: Task) -> Self {
        Self::new(task)
    }
}

/// Named view over the task list
///
/// Uses lowercase variant names to match the names typed at the prompt and
/// written in the config file.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum TaskFilter {
    /// Every task
    #[default]
    all,
    /// Only tasks marked completed
    completed,
    /// Only tasks not yet completed
    pending,
}

impl TaskFilter {
    /// Parse a filter name, falling back to `all` for anything unrecognised
    ///
    /// Only the exact names match; `" completed "` or `"Completed"` give `all`.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or(TaskFilter::all)
    }

    /// Check whether a task belongs in this view
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::all => true,
            TaskFilter::completed => task.completed,
            TaskFilter::pending => !task.completed,
        }
    }
}

impl FromStr for TaskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TaskFilter::all),
            "completed" => Ok(TaskFilter::completed),
            "pending" => Ok(TaskFilter::pending),
            _ => Err(format!(
                "Invalid filter '{}'. Valid options are: all, completed, pending",
                s
            )),
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskFilter::all => "all",
            TaskFilter::completed => "completed",
            TaskFilter::pending => "pending",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Buy milk");
        assert_eq!(task.description(), "Buy milk");
        assert!(!task.is_completed());
        assert_eq!(task.due_date(), None);
        assert!(task.tags().is_empty());
    }

    #[test]
    fn test_display_plain() {
        let task = Task::new("Buy milk");
        assert_eq!(task.display(), "Buy milk - Pending");
    }

    #[test]
    fn test_display_with_due_date_and_tags() {
        let mut task = Task::new("Write report");
        task.set_due_date("2024-05-01");
        task.set_tags(vec!["work".to_string(), "urgent".to_string()]);
        task.mark_completed();
        assert_eq!(
            task.display(),
            "Write report - Completed, Due: 2024-05-01, Tags: work, urgent"
        );
    }

    #[test]
    fn test_display_skips_empty_due_date() {
        let mut task = Task::new("Call mom");
        task.set_due_date("");
        assert_eq!(task.display(), "Call mom - Pending");
    }

    #[test]
    fn test_malformed_due_date_is_stored() {
        let mut task = Task::new("Pay rent");
        task.set_due_date("next friday");
        assert_eq!(task.due_date(), Some("next friday"));
        assert_eq!(task.display(), "Pay rent - Pending, Due: next friday");
    }

    #[test]
    fn test_set_tags_replaces() {
        let mut task = Task::new("Gym");
        task.set_tags(vec!["health".to_string()]);
        task.set_tags(vec!["fitness".to_string(), "morning".to_string()]);
        assert_eq!(task.tags(), ["fitness", "morning"]);
    }

    #[test]
    fn test_mark_toggles_are_idempotent() {
        let mut task = Task::new("Gym");
        task.mark_completed();
        task.mark_completed();
        assert!(task.is_completed());
        task.mark_pending();
        task.mark_pending();
        assert!(!task.is_completed());
    }

    #[test]
    fn test_task_ref_identity_equality() {
        let a = TaskRef::new(Task::new("Same"));
        let b = TaskRef::new(Task::new("Same"));
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_task_ref_shares_mutation() {
        let a = TaskRef::new(Task::new("Shared"));
        let b = a.clone();
        b.borrow_mut().mark_completed();
        assert!(a.is_completed());
    }

    #[test]
    #[should_panic(expected = "already borrowed")]
    fn test_borrow_mut_while_borrowed_panics() {
        let a = TaskRef::new(Task::new("Held"));
        let other = a.clone();
        let _held = a.borrow();
        other.borrow_mut().mark_completed();
    }

    #[test]
    fn test_filter_parse_lenient() {
        assert_eq!(TaskFilter::parse_lenient("completed"), TaskFilter::completed);
        assert_eq!(TaskFilter::parse_lenient(" pending "), TaskFilter::all);
        assert_eq!(TaskFilter::parse_lenient("done"), TaskFilter::all);
        assert_eq!(TaskFilter::parse_lenient(""), TaskFilter::all);
    }

    #[test]
    fn test_filter_from_str_is_strict() {
        assert!("Completed".parse::<TaskFilter>().is_err());
        assert_eq!("all".parse::<TaskFilter>().unwrap(), TaskFilter::all);
    }
}
