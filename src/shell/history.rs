//! Undo and redo handlers for the interactive shell

use super::Shell;
use anyhow::Result;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Shell<R, W> {
    pub(crate) fn handle_undo(&mut self) -> Result<()> {
        if self.list.undo() {
            self.say("Undo successful.")
        } else {
            self.say("Nothing to undo.")
        }
    }

    pub(crate) fn handle_redo(&mut self) -> Result<()> {
        if self.list.redo() {
            self.say("Redo successful.")
        } else {
            self.say("Nothing to redo.")
        }
    }
}
