// crates/extract_todos/src/lib.rs

use std::path::Path;

use collect_source_files::SourceFile;
use todo_marker::match_todo;

/// One TODO comment found in a source file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Todo {
    /// At least one `!` appears in the comment text.
    pub has_mark: bool,
    /// Number of `!` characters in the comment text.
    pub mark_count: usize,
    pub user: String,
    /// Raw date text, interpreted only when sorting or filtering.
    pub date: String,
    pub comment: String,
    /// Base name of the file the comment was found in.
    pub source_file: String,
}

impl Todo {
    /// Builds a `Todo` from the trimmed text after the marker.
    ///
    /// `user; date; comment...` is split only when there are at least three
    /// `;`-separated segments. Otherwise the whole text becomes the comment.
    pub fn from_raw(raw: &str, source_file: &str) -> Self {
        let mark_count = raw.chars().filter(|&c| c == '!').count();
        let parts: Vec<&str> = raw.split(';').map(str::trim).collect();

        let (user, date, comment) = if parts.len() >= 3 {
            (parts[0].to_string(), parts[1].to_string(), parts[2..].join("; "))
        } else {
            (String::new(), String::new(), raw.to_string())
        };

        Todo {
            has_mark: mark_count > 0,
            mark_count,
            user,
            date,
            comment,
            source_file: source_file.to_string(),
        }
    }
}

/// Extracts every TODO comment from `files`, in file order then line order.
/// Each matching line yields exactly one `Todo`.
pub fn extract_todos(files: &[SourceFile]) -> Vec<Todo> {
    let mut todos = Vec::new();

    for file in files {
        let basename = base_name(&file.file_path);
        let before = todos.len();
        for line in file.content.split('\n') {
            if let Some(rest) = match_todo(line) {
                todos.push(Todo::from_raw(rest.trim(), &basename));
            }
        }
        log::debug!("{}: {} todo(s)", basename, todos.len() - before);
    }

    todos
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
