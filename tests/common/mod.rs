#![allow(dead_code)]
/// Common test utilities and helpers
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const WIDGETS_MODEL: &str = include_str!("../fixtures/widgets.inc.php");
pub const NEWSITEMS_MODEL: &str = include_str!("../fixtures/newsitems.inc.php");
pub const BROKEN_MODEL: &str = include_str!("../fixtures/broken.inc.php");

/// The reference template tree shipped with the crate.
pub fn resources_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("resources")
}

/// Create a throwaway project root containing `lib/<plural>.inc.php`.
pub fn project_with_model(plural: &str, source: &str) -> TempDir {
    let dir = TempDir::new().expect("failed to create temp project");
    fs::create_dir_all(dir.path().join("lib")).unwrap();
    fs::write(dir.path().join("lib").join(format!("{plural}.inc.php")), source).unwrap();
    dir
}

/// Copy the shipped reference tree into a temp dir so a test can modify it.
pub fn editable_resources() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp resources");
    copy_tree(&resources_dir(), dir.path());
    dir
}

fn copy_tree(from: &Path, to: &Path) {
    for entry in walkdir::WalkDir::new(from) {
        let entry = entry.unwrap();
        let relative = entry.path().strip_prefix(from).unwrap();
        let target = to.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}
