//! Shared helpers for unit tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Write a file under `root`, creating parent directories as needed.
/// Returns the full path.
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Create empty template files under `<root>/src/templates`.
pub fn write_templates(root: &Path, names: &[&str]) {
    for name in names {
        write_file(root, &format!("src/templates/{name}.js"), "");
    }
}
