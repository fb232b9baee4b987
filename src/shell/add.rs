//! Add handler for the interactive shell

use super::Shell;
use crate::todo::TaskBuilder;
use crate::validation;
use anyhow::Result;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Prompts for description, due date and tags, then adds the task.
    pub(crate) fn handle_add(&mut self) -> Result<()> {
        let Some(description) = self.prompt("Enter task description: ")? else {
            return Ok(());
        };
        let Some(due_date) = self.prompt("Enter due date (optional, format: YYYY-MM-DD): ")? else {
            return Ok(());
        };
        let Some(tags) = self.prompt("Enter tags (optional, separated by commas): ")? else {
            return Ok(());
        };

        let task = TaskBuilder::new(description)
            .maybe_due_date(validation::non_empty(&due_date))
            .tags(validation::parse_tags(&tags))
            .build_shared();
        self.list.add_task(task);

        self.say("Task added successfully!")
    }
}
