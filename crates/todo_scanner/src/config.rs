// crates/todo_scanner/src/config.rs

use std::path::PathBuf;

use log::LevelFilter;

/// Runtime configuration resolved from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Directory scanned recursively.
    pub root: PathBuf,
    /// File suffix without the leading dot.
    pub extension: String,
    pub verbose: bool,
}

impl ScannerConfig {
    pub fn new(root: PathBuf, extension: &str, verbose: bool) -> Self {
        Self {
            root,
            extension: extension.trim_start_matches('.').to_string(),
            verbose,
        }
    }

    /// Debug output with `--verbose`, otherwise warnings only.
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}
