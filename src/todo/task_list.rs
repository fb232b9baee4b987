use super::snapshot::Snapshot;
use super::task::TaskRef;
use crate::error::{Result, TaskListError};
use std::num::NonZeroUsize;

/// The live task collection and its undo/redo history
///
/// Every mutating operation (add, delete, mark completed, mark pending) pushes
/// a snapshot of the state *after* the change onto the undo stack and clears
/// the redo stack. Undo and redo move snapshots between the two stacks without
/// clearing either.
///
/// Because the snapshot is taken after the change, the top of the undo stack
/// always equals the current list right after a mutation. The first `undo()`
/// therefore restores an identical sequence, and the rollback becomes visible
/// on the second one.
#[derive(Debug, Default)]
pub struct TaskList {
    /// Tasks in insertion order, which is also display order
    pub(crate) tasks: Vec<TaskRef>,

    /// Snapshots available to undo, most recent last
    pub(crate) undo_stack: Vec<Snapshot>,

    /// Snapshots available to redo, most recent last
    pub(crate) redo_stack: Vec<Snapshot>,

    /// Maximum number of undo snapshots kept (None = unbounded)
    pub(crate) history_limit: Option<NonZeroUsize>,
}

impl TaskList {
    /// Create an empty task list with unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty task list that keeps at most `limit` undo snapshots
    ///
    /// When the limit is exceeded the oldest snapshot is dropped. A limit of
    /// zero would discard every snapshot, so it is ruled out by the type.
    pub fn with_history_limit(limit: NonZeroUsize) -> Self {
        Self {
            history_limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn history_limit(&self) -> Option<NonZeroUsize> {
        self.history_limit
    }

    /// Append a task and record the new state
    pub fn add_task(&mut self, task: TaskRef) {
        tracing::debug!(task = %task.description(), "adding task");
        self.tasks.push(task);
        self.save_state();
    }

    /// Remove a task by identity and record the new state
    ///
    /// # Errors
    /// Returns [`TaskListError::TaskNotFound`] if the handle is not in the
    /// list. No snapshot is taken in that case.
    pub fn delete_task(&mut self, task: &TaskRef) -> Result<()> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.ptr_eq(task))
            .ok_or_else(|| TaskListError::TaskNotFound(task.description()))?;
        let removed = self.tasks.remove(pos);
        tracing::debug!(task = %removed.description(), position = pos, "deleted task");
        self.save_state();
        Ok(())
    }

    /// Mark a task completed and record the new state
    ///
    /// Always records a snapshot, even when the task was already completed.
    ///
    /// # Panics
    /// Panics if the task is currently borrowed through any [`TaskRef`].
    pub fn mark_completed(&mut self, task: &TaskRef) {
        task.borrow_mut().mark_completed();
        self.save_state();
    }

    /// Mark a task pending and record the new state
    ///
    /// # Panics
    /// Panics if the task is currently borrowed through any [`TaskRef`].
    pub fn mark_pending(&mut self, task: &TaskRef) {
        task.borrow_mut().mark_pending();
        self.save_state();
    }

    /// Push a snapshot of the current tasks and invalidate redo history
    pub fn save_state(&mut self) {
        let snapshot = Snapshot::capture(&self.tasks);
        self.push_undo(snapshot);
        if !self.redo_stack.is_empty() {
            tracing::debug!(discarded = self.redo_stack.len(), "clearing redo history");
        }
        self.redo_stack.clear();
    }

    /// Step back through history
    ///
    /// Returns `false` (and does nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(Snapshot::capture(&self.tasks));
        self.tasks = snapshot.into_state();
        tracing::debug!(
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "undo applied"
        );
        true
    }

    /// Step forward through history
    ///
    /// Returns `false` (and does nothing) when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        let current = Snapshot::capture(&self.tasks);
        self.push_undo(current);
        self.tasks = snapshot.into_state();
        tracing::debug!(
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "redo applied"
        );
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Undo snapshots, oldest first
    pub fn undo_snapshots(&self) -> &[Snapshot] {
        &self.undo_stack
    }

    /// Redo snapshots, oldest first
    pub fn redo_snapshots(&self) -> &[Snapshot] {
        &self.redo_stack
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo_stack.push(snapshot);
        if let Some(limit) = self.history_limit.map(NonZeroUsize::get)
            && self.undo_stack.len() > limit
        {
            let excess = self.undo_stack.len() - limit;
            self.undo_stack.drain(..excess);
            tracing::debug!(dropped = excess, limit, "trimmed undo history");
        }
    }
}
