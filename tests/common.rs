// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn folder_index_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("folder-index"))
}

// Creates a file (and its parent directories) under the fixture root.
#[allow(dead_code)]
pub fn create_file(
    dir_path: &Path,
    relative_path: &str,
    content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let file_path = dir_path.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(())
}

// Builds the fixture tree shared by several manifest tests.
#[allow(dead_code)]
pub fn create_yaml_fixtures(dir_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    for relative in [
        "index.yml",
        "nested-folder-1/faq.yml",
        "nested-folder-1/index.yml",
        "nested-folder-2/index.yml",
        "nested-folder-1/nested-folder-1-1/index.yml",
    ] {
        create_file(dir_path, relative, "title: fixture")?;
    }
    // A file the extension filter must exclude.
    create_file(dir_path, "index.txt", "not yaml")?;
    Ok(())
}
