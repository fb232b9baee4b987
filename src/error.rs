//! Error types for the task list

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskListError {
    /// The task handle is not a member of the list
    #[error("Task '{0}' not found")]
    TaskNotFound(String),
}

pub type Result<T> = std::result::Result<T, TaskListError>;
