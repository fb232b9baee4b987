//! Input helpers for the task list
//!
//! Nothing here rejects input. Due dates and descriptions are stored as the
//! user typed them; these helpers only normalize optional fields and flag
//! dates that look wrong.

use chrono::NaiveDate;

/// Check whether a due date string is a real calendar date in YYYY-MM-DD form
///
/// # Arguments
/// * `date_str` - Date string as entered by the user
///
/// # Returns
/// `true` if the string parses with chrono as `%Y-%m-%d`
pub fn is_iso_date(date_str: &str) -> bool {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").is_ok()
}

/// Turn an optional text answer into `None` when it is blank
///
/// # Examples
/// ```
/// # use todo_history::validation::non_empty;
/// assert_eq!(non_empty("  2024-05-01 "), Some("2024-05-01".to_string()));
/// assert_eq!(non_empty("   "), None);
/// ```
pub fn non_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Split a comma-separated tag answer into tags
///
/// Each tag is trimmed and blank entries are dropped, so an empty answer
/// yields no tags.
///
/// # Examples
/// ```
/// # use todo_history::validation::parse_tags;
/// assert_eq!(parse_tags("work, urgent,,home "), vec!["work", "urgent", "home"]);
/// assert!(parse_tags("").is_empty());
/// ```
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
