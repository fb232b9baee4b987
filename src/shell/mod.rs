//! Interactive menu loop
//!
//! The shell owns one [`TaskList`] and a pair of I/O handles. Each menu
//! entry is handled in its own file.

mod add;
mod complete;
mod delete;
mod history;
mod view;

use crate::config::ShellConfig;
use crate::formatting;
use crate::todo::TaskList;
use anyhow::Result;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// A menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    MarkCompleted,
    Delete,
    View,
    Undo,
    Redo,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::MarkCompleted),
            "3" => Ok(MenuChoice::Delete),
            "4" => Ok(MenuChoice::View),
            "5" => Ok(MenuChoice::Undo),
            "6" => Ok(MenuChoice::Redo),
            "0" => Ok(MenuChoice::Exit),
            other => Err(format!("Invalid choice '{}'", other)),
        }
    }
}

/// Text front end for a task list
pub struct Shell<R, W> {
    pub(crate) list: TaskList,
    pub(crate) config: ShellConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell with a fresh task list built from the config
    pub fn new(config: ShellConfig, input: R, output: W) -> Self {
        let list = match config.history_limit {
            Some(limit) => TaskList::with_history_limit(limit),
            None => TaskList::new(),
        };
        Self::with_task_list(list, config, input, output)
    }

    /// Create a shell around an existing task list
    pub fn with_task_list(list: TaskList, config: ShellConfig, input: R, output: W) -> Self {
        Self {
            list,
            config,
            input,
            output,
        }
    }

    pub fn task_list(&self) -> &TaskList {
        &self.list
    }

    /// Consume the shell, returning the task list and output handle
    pub fn into_parts(self) -> (TaskList, W) {
        (self.list, self.output)
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            if self.config.show_menu {
                writeln!(self.output, "{}", formatting::MENU)?;
            }
            let Some(answer) = self.prompt("Enter your choice: ")? else {
                tracing::debug!("input closed, leaving menu loop");
                break;
            };

            let choice = match answer.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    tracing::debug!(error = %e, "rejected menu input");
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    continue;
                }
            };

            match choice {
                MenuChoice::Add => self.handle_add()?,
                MenuChoice::MarkCompleted => self.handle_mark_completed()?,
                MenuChoice::Delete => self.handle_delete()?,
                MenuChoice::View => self.handle_view()?,
                MenuChoice::Undo => self.handle_undo()?,
                MenuChoice::Redo => self.handle_redo()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting To-Do List Manager. Goodbye!")?;
                    break;
                }
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Print a prompt and read one line
    ///
    /// Returns `None` at end of input. The trailing newline is stripped; other
    /// whitespace is kept so descriptions match exactly what was typed.
    pub(crate) fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    pub(crate) fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub(crate) fn write_raw(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        Ok(())
    }
}
