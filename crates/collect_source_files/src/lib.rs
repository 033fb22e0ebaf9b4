// crates/collect_source_files/src/lib.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// A file selected for scanning, with its full text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub file_path: PathBuf,
    pub content: String,
}

/// Recursively collects every regular file under `root_dir` whose name ends
/// with `.<extension>` and reads its contents.
///
/// Entries are visited in file-name order so the result is stable for a given
/// tree. Symlinks are not followed. Invalid UTF-8 is decoded lossily.
///
/// # Errors
///
/// Any directory that cannot be walked or file that cannot be read aborts the
/// whole collection; no partial result is returned.
pub fn collect_source_files<P: AsRef<Path>>(root_dir: P, extension: &str) -> Result<Vec<SourceFile>> {
    let root_dir = root_dir.as_ref();
    let suffix = format!(".{}", extension);
    let mut files = Vec::new();

    for entry in WalkDir::new(root_dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Error walking {}", root_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let selected = entry
            .file_name()
            .to_str()
            .map(|name| name.ends_with(&suffix))
            .unwrap_or(false);
        if !selected {
            continue;
        }

        let file_path = entry.into_path();
        let bytes = fs::read(&file_path)
            .with_context(|| format!("Error reading file {}", file_path.display()))?;
        let content = String::from_utf8_lossy(&bytes).into_owned();
        log::debug!("collected {} ({} bytes)", file_path.display(), bytes.len());
        files.push(SourceFile { file_path, content });
    }

    log::debug!(
        "{} file(s) ending in '{}' found under {}",
        files.len(),
        suffix,
        root_dir.display()
    );
    Ok(files)
}
