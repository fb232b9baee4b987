//! View handler for the interactive shell

use super::Shell;
use crate::formatting;
use crate::todo::TaskFilter;
use anyhow::Result;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Prompts for a filter and prints the matching tasks.
    ///
    /// Surrounding spaces are ignored. A blank answer uses the configured
    /// default filter; anything unrecognised shows all tasks.
    pub(crate) fn handle_view(&mut self) -> Result<()> {
        let Some(answer) = self.prompt("Enter filter type (all/completed/pending): ")? else {
            return Ok(());
        };

        let filter = if answer.trim().is_empty() {
            self.config.default_filter
        } else {
            TaskFilter::parse_lenient(answer.trim())
        };
        let lines = self.list.view(filter);
        self.write_raw(&formatting::format_task_lines(&lines))
    }
}
