// crates/collect_source_files/tests/integration_tree.rs

use std::fs;
use std::path::PathBuf;

use collect_source_files::collect_source_files;
use tempfile::tempdir;

/// Files in nested directories are found, and the order is the sorted walk order.
#[test]
fn test_collects_nested_files_in_stable_order() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("src/lib")).unwrap();
    fs::create_dir_all(root.join("a_dir")).unwrap();
    fs::write(root.join("z.js"), "z").unwrap();
    fs::write(root.join("src/main.js"), "main").unwrap();
    fs::write(root.join("src/lib/util.js"), "util").unwrap();
    fs::write(root.join("a_dir/first.js"), "first").unwrap();
    fs::write(root.join("src/readme.md"), "ignored").unwrap();

    let files = collect_source_files(root, "js").unwrap();
    let paths: Vec<PathBuf> = files.iter().map(|f| f.file_path.clone()).collect();
    assert_eq!(
        paths,
        vec![
            root.join("a_dir/first.js"),
            root.join("src/lib/util.js"),
            root.join("src/main.js"),
            root.join("z.js"),
        ]
    );

    // A second walk of the same tree yields the same order.
    let again = collect_source_files(root, "js").unwrap();
    assert_eq!(files, again);
}

/// Another extension can be configured.
#[test]
fn test_collects_configured_extension() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("main.rs"), "// TODO rust").unwrap();
    fs::write(dir.path().join("main.js"), "// TODO js").unwrap();

    let files = collect_source_files(dir.path(), "rs").unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].content, "// TODO rust");
}

/// An empty tree yields no files and no error.
#[test]
fn test_empty_tree() {
    let dir = tempdir().unwrap();
    let files = collect_source_files(dir.path(), "js").unwrap();
    assert!(files.is_empty());
}

/// A directory that cannot be read aborts collection.
#[cfg(unix)]
#[test]
fn test_unreadable_directory_aborts() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("hidden.js"), "// TODO").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root bypasses permission bits; nothing to assert in that case.
    let probe = fs::read_dir(&locked);
    let result = collect_source_files(dir.path(), "js");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    if probe.is_err() {
        assert!(result.is_err());
    }
}
