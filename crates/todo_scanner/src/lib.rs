// crates/todo_scanner/src/lib.rs

pub mod config;

use anyhow::{Context, Result};
use collect_source_files::collect_source_files;
use extract_todos::{extract_todos, Todo};

use config::ScannerConfig;

/// Collects the configured files and extracts every todo from them.
/// Fails on the first unreadable directory or file.
pub fn load_todos(config: &ScannerConfig) -> Result<Vec<Todo>> {
    let files = collect_source_files(&config.root, &config.extension)
        .with_context(|| format!("Failed to collect .{} files under {}", config.extension, config.root.display()))?;
    let todos = extract_todos(&files);
    log::debug!("{} todo(s) extracted from {} file(s)", todos.len(), files.len());
    Ok(todos)
}
