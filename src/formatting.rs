//! Formatting helpers for the interactive shell
//!
//! This module contains the menu text and task list output.

/// Menu printed before each prompt
pub const MENU: &str = "\n===== To-Do List Manager =====\n\
1. Add Task\n\
2. Mark Completed\n\
3. Delete Task\n\
4. View Tasks\n\
5. Undo\n\
6. Redo\n\
0. Exit";

/// Header printed above a task listing
pub const TASKS_HEADER: &str = "\n===== Tasks =====";

/// Format rendered task lines into a display block
///
/// # Arguments
/// * `lines` - Task display strings, already filtered and ordered
///
/// # Returns
/// The header followed by one task per line, or a "No tasks found" note
pub fn format_task_lines(lines: &[String]) -> String {
    let mut result = String::from(TASKS_HEADER);
    result.push('\n');
    if lines.is_empty() {
        result.push_str("No tasks found.\n");
        return result;
    }
    for line in lines {
        result.push_str(line);
        result.push('\n');
    }
    result
}
