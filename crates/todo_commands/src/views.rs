// crates/todo_commands/src/views.rs

//! Derived views of the todo collection. Every function returns a new
//! sequence and leaves its input untouched.

use std::cmp::Reverse;

use chrono::NaiveDate;
use extract_todos::Todo;

use crate::dates::{parse_todo_date, start_of_day};

/// Todos carrying at least one `!`, in collection order.
pub fn important(todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|t| t.mark_count > 0).cloned().collect()
}

/// Todos whose user matches `name`, ignoring case.
pub fn by_user(todos: &[Todo], name: &str) -> Vec<Todo> {
    let name = name.to_lowercase();
    todos
        .iter()
        .filter(|t| !t.user.is_empty() && t.user.to_lowercase() == name)
        .cloned()
        .collect()
}

/// Todos dated strictly after the start of `day`. A timestamp later on `day`
/// itself matches. Empty or unparsable dates never match.
pub fn after_date(todos: &[Todo], day: NaiveDate) -> Vec<Todo> {
    let point = start_of_day(day);
    todos
        .iter()
        .filter(|t| match parse_todo_date(&t.date) {
            Some(date) => date > point,
            None => {
                if !t.date.is_empty() {
                    log::debug!("skipping unparsable date '{}' in {}", t.date, t.source_file);
                }
                false
            }
        })
        .cloned()
        .collect()
}

/// Most `!` first.
pub fn sorted_by_importance(todos: &[Todo]) -> Vec<Todo> {
    let mut sorted = todos.to_vec();
    sorted.sort_by_key(|t| Reverse(t.mark_count));
    sorted
}

/// Named users alphabetically (case-insensitive), then todos without a user.
pub fn sorted_by_user(todos: &[Todo]) -> Vec<Todo> {
    let mut sorted = todos.to_vec();
    sorted.sort_by_cached_key(|t| (t.user.is_empty(), t.user.to_lowercase()));
    sorted
}

/// Most recent first, then unparsable dates, then todos without a date.
pub fn sorted_by_date(todos: &[Todo]) -> Vec<Todo> {
    let mut sorted = todos.to_vec();
    sorted.sort_by_cached_key(|t| {
        if t.date.is_empty() {
            return (2, None);
        }
        match parse_todo_date(&t.date) {
            Some(date) => (0, Some(Reverse(date))),
            None => {
                log::debug!("unparsable date '{}' in {} sorts last", t.date, t.source_file);
                (1, None)
            }
        }
    });
    sorted
}
