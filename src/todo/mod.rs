//! Task list domain model and history
//!
//! This module contains the core data structures:
//! - `task`: the Task entity, its shared handle, and view filters
//! - `builder`: fluent Task construction
//! - `snapshot`: immutable captures of list membership
//! - `task_list`: the live list and its undo/redo protocol
//! - `queries`: read-only lookups and filtered views

mod builder;
mod queries;
mod snapshot;
mod task;
mod task_list;

// Re-export all public types
pub use builder::TaskBuilder;
pub use snapshot::Snapshot;
pub use task::{Task, TaskFilter, TaskRef};
pub use task_list::TaskList;
