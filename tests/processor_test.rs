use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use create_discord_app::config::{Language, ProjectConfig};
use create_discord_app::generators::GeneratedFile;
use create_discord_app::processor::{generate, write_file};
use tempfile::TempDir;
use walkdir::WalkDir;

fn config(language: Language, interactions: bool) -> ProjectConfig {
    ProjectConfig {
        project_name: "my-bot".to_string(),
        language,
        interactions: interactions.into(),
    }
}

fn collect_files(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry.path().strip_prefix(root).unwrap().to_string_lossy().into_owned()
        })
        .collect()
}

#[test]
fn test_generate_javascript_project() {
    let temp_dir = TempDir::new().unwrap();

    generate(temp_dir.path(), &config(Language::JavaScript, true)).unwrap();

    let expected: BTreeSet<String> = [
        "src/index.js",
        "src/commands/ping.js",
        "src/events/ready.js",
        "src/events/interactionCreate.js",
        "src/utils/logger.js",
        "package.json",
        ".env",
        ".gitignore",
        "README.md",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(collect_files(temp_dir.path()), expected);

    // The config directory is part of the skeleton even though no generator
    // writes into it.
    assert!(temp_dir.path().join("config").is_dir());

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp_dir.path().join("package.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["main"], "src/index.js");
}

#[test]
fn test_generate_typescript_project() {
    let temp_dir = TempDir::new().unwrap();

    generate(temp_dir.path(), &config(Language::TypeScript, false)).unwrap();

    let files = collect_files(temp_dir.path());
    assert!(files.contains("tsconfig.json"));
    assert!(files.contains("src/index.ts"));
    assert!(!files.contains("src/events/interactionCreate.ts"));

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp_dir.path().join("package.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["main"], "dist/index.js");
    assert_eq!(manifest["scripts"]["build"], "tsc");
}

#[test]
fn test_generate_is_repeatable() {
    let temp_dir = TempDir::new().unwrap();
    let config = config(Language::JavaScript, false);

    generate(temp_dir.path(), &config).unwrap();
    let first = collect_files(temp_dir.path());

    generate(temp_dir.path(), &config).unwrap();
    let second = collect_files(temp_dir.path());

    assert_eq!(first, second);
}

#[test]
fn test_write_file_creates_parents() {
    let temp_dir = TempDir::new().unwrap();
    let file = GeneratedFile::text("deep/nested/file.txt", "content");

    write_file(temp_dir.path(), &file).unwrap();

    let written = fs::read_to_string(temp_dir.path().join("deep/nested/file.txt")).unwrap();
    assert_eq!(written, "content");
}

#[test]
fn test_write_failure_surfaces() {
    let temp_dir = TempDir::new().unwrap();
    // Occupy the parent directory name with a file so the write must fail.
    fs::write(temp_dir.path().join("src"), "not a directory").unwrap();

    let file = GeneratedFile::text("src/index.js", "content");
    assert!(write_file(temp_dir.path(), &file).is_err());
}

#[test]
fn test_json_files_are_pretty_printed() {
    let temp_dir = TempDir::new().unwrap();

    generate(temp_dir.path(), &config(Language::TypeScript, false)).unwrap();

    let manifest = fs::read_to_string(temp_dir.path().join("package.json")).unwrap();
    assert!(manifest.starts_with("{\n"));
    assert!(manifest.ends_with("}\n"));
}
