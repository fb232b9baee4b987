//! Common test utilities for integration tests

#![allow(dead_code)]

use todo_history::{Shell, ShellConfig, Task, TaskBuilder, TaskList, TaskRef};

/// Create a shared pending task with only a description
pub fn task(description: &str) -> TaskRef {
    TaskRef::new(Task::new(description))
}

/// Create a shared task with due date and tags
pub fn full_task(description: &str, due_date: &str, tags: &[&str]) -> TaskRef {
    TaskBuilder::new(description)
        .due_date(due_date)
        .tags(tags.iter().map(|t| t.to_string()).collect())
        .build_shared()
}

/// Build a list by adding one pending task per description
pub fn list_with(descriptions: &[&str]) -> TaskList {
    let mut list = TaskList::new();
    for d in descriptions {
        list.add_task(task(d));
    }
    list
}

/// Run a scripted shell session (menu hidden) and return the list and output
pub fn run_session(script: &str) -> (TaskList, String) {
    let config = ShellConfig {
        show_menu: false,
        ..ShellConfig::default()
    };
    let mut shell = Shell::new(config, script.as_bytes(), Vec::new());
    shell.run().unwrap();
    let (list, output) = shell.into_parts();
    (list, String::from_utf8(output).unwrap())
}
