//! Shared helpers for unit tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// Creates an empty temporary directory that is removed on drop.
pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("failed to create temp dir")
}

/// Writes `content` to `name` inside `dir` and returns the file path.
pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("failed to write test file");
    path
}
