//! Mark-completed handler for the interactive shell

use super::Shell;
use anyhow::Result;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Looks up the first task with the given description and completes it.
    pub(crate) fn handle_mark_completed(&mut self) -> Result<()> {
        let Some(description) = self.prompt("Enter task description to mark as completed: ")?
        else {
            return Ok(());
        };

        match self.list.find_by_description(&description) {
            Some(task) => {
                self.list.mark_completed(&task);
                self.say(&format!("Task '{}' marked as completed.", description))
            }
            None => self.say(&format!("Task '{}' not found.", description)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::run_script;

    #[test]
    fn test_mark_completed() {
        let (list, output) = run_script("1\nBuy milk\n\n\n2\nBuy milk\n0\n");
        assert!(output.contains("Task 'Buy milk' marked as completed."));
        assert_eq!(list.view_tasks("completed"), vec!["Buy milk - Completed"]);
        assert_eq!(list.undo_depth(), 2);
    }

    #[test]
    fn test_mark_completed_not_found() {
        let (list, output) = run_script("2\nGhost\n0\n");
        assert!(output.contains("Task 'Ghost' not found."));
        assert_eq!(list.undo_depth(), 0);
    }

    #[test]
    fn test_mark_completed_first_duplicate_only() {
        let (list, _) = run_script("1\nDup\n\none\n1\nDup\n\ntwo\n2\nDup\n0\n");
        assert_eq!(
            list.view_tasks("all"),
            vec!["Dup - Completed, Tags: one", "Dup - Pending, Tags: two"]
        );
    }
}
