//! Delete handler for the interactive shell

use super::Shell;
use anyhow::Result;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Looks up the first task with the given description and deletes it.
    pub(crate) fn handle_delete(&mut self) -> Result<()> {
        let Some(description) = self.prompt("Enter task description to delete: ")? else {
            return Ok(());
        };

        match self.list.find_by_description(&description) {
            Some(task) => {
                self.list.delete_task(&task)?;
                self.say(&format!("Task '{}' deleted.", description))
            }
            None => self.say(&format!("Task '{}' not found.", description)),
        }
    }
}
