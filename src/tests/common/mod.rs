// tests/common/mod.rs
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Write `content` to `<tempdir>/<name>` and return the dir guard with the path.
/// The file is removed when the guard is dropped.
pub fn write_temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write temp file");
    (dir, path)
}
