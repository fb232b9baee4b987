//! To-do List Manager Library
//!
//! This library provides an in-memory task list with snapshot-based undo/redo
//! history, plus a small interactive shell that drives it.
//!
//! # Architecture
//!
//! - **Domain Layer**: `todo` module - Task, TaskBuilder, Snapshot and TaskList
//! - **Shell Layer**: `shell` module - menu loop over any `BufRead`/`Write` pair
//! - **Configuration**: `config` module - optional TOML settings for the shell
//!
//! # History semantics
//!
//! Every mutation records a snapshot of the list *after* the change. Snapshots
//! copy list membership, not the tasks themselves, so completing a task is
//! visible in older snapshots that still contain it.
//!
//! # Example
//!
//! ```
//! use todo_history::{TaskBuilder, TaskList};
//!
//! let mut list = TaskList::new();
//! list.add_task(TaskBuilder::new("Buy milk").build_shared());
//! list.add_task(TaskBuilder::new("Call mom").tags(vec!["family".into()]).build_shared());
//!
//! let milk = list.find_by_description("Buy milk").unwrap();
//! list.mark_completed(&milk);
//!
//! assert_eq!(list.view_tasks("completed"), vec!["Buy milk - Completed"]);
//! assert_eq!(list.view_tasks("pending"), vec!["Call mom - Pending, Tags: family"]);
//! ```

pub mod config;
pub mod error;
pub mod formatting;
pub mod shell;
pub mod todo;
pub mod validation;

// Re-export commonly used types
pub use config::{ConfigLoader, ShellConfig};
pub use error::TaskListError;
pub use shell::{MenuChoice, Shell};
pub use todo::{Snapshot, Task, TaskBuilder, TaskFilter, TaskList, TaskRef};
