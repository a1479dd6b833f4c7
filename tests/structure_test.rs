use std::fs;
use std::path::Path;

use create_discord_app::structure::{create_structure, project_layout, DirectoryStructure};
use tempfile::TempDir;
use walkdir::WalkDir;

fn collect_dirs(root: &Path) -> Vec<String> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| {
            entry.path().strip_prefix(root).unwrap().to_string_lossy().into_owned()
        })
        .collect()
}

#[test]
fn test_creates_project_layout() {
    let temp_dir = TempDir::new().unwrap();

    create_structure(temp_dir.path(), &project_layout()).unwrap();

    for dir in ["src", "src/commands", "src/events", "src/utils", "config"] {
        assert!(temp_dir.path().join(dir).is_dir(), "missing directory: {dir}");
    }
}

#[test]
fn test_create_structure_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let layout = project_layout();

    create_structure(temp_dir.path(), &layout).unwrap();
    let first = collect_dirs(temp_dir.path());

    create_structure(temp_dir.path(), &layout).unwrap();
    let second = collect_dirs(temp_dir.path());

    assert_eq!(first, second);
}

#[test]
fn test_empty_structure_creates_nothing() {
    let temp_dir = TempDir::new().unwrap();

    create_structure(temp_dir.path(), &DirectoryStructure::new()).unwrap();

    assert!(collect_dirs(temp_dir.path()).is_empty());
}

#[test]
fn test_creation_failure_surfaces() {
    let temp_dir = TempDir::new().unwrap();
    // Occupy the directory name with a file so creation must fail.
    fs::write(temp_dir.path().join("src"), "not a directory").unwrap();

    assert!(create_structure(temp_dir.path(), &project_layout()).is_err());
}
