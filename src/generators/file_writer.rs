use crate::error::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// File-system capability handed to the generator.
///
/// The generator never touches `std::fs` directly; everything goes through
/// this trait so a run can be simulated end to end. The dry-run variant is
/// just another implementation, indistinguishable from the caller's side.
pub trait FileSystem {
    /// Read a file to a string.
    fn read_file(&self, path: &Path) -> Result<String>;

    /// Write `content` to `path`, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;

    /// Create a directory and all missing parents. Creating a directory that
    /// already exists is not an error.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// File names of the direct children of `dir`, sorted. Subdirectories are
    /// included; callers filter with [`FileSystem::is_file`].
    fn list_dir(&self, dir: &Path) -> Result<Vec<String>>;

    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;
}

/// The real thing: reads and writes the local file system.
#[derive(Debug, Default)]
pub struct StandardFileSystem;

impl StandardFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for StandardFileSystem {
    fn read_file(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content)?;
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn list_dir(&self, dir: &Path) -> Result<Vec<String>> {
        let mut names: Vec<String> = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(std::io::Error::from)?;
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        names.sort();
        Ok(names)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Simulates a run: reads and queries hit the real file system, writes and
/// directory creation are swallowed.
#[derive(Debug, Default)]
pub struct DryRunFileSystem {
    inner: StandardFileSystem,
}

impl DryRunFileSystem {
    pub fn new() -> Self {
        Self {
            inner: StandardFileSystem::new(),
        }
    }
}

impl FileSystem for DryRunFileSystem {
    fn read_file(&self, path: &Path) -> Result<String> {
        self.inner.read_file(path)
    }

    fn write_file(&self, _path: &Path, _content: &str) -> Result<()> {
        Ok(())
    }

    fn create_dir_all(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn list_dir(&self, dir: &Path) -> Result<Vec<String>> {
        self.inner.list_dir(dir)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner.is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    mod standard {
        use super::*;

        #[test]
        fn test_write_then_read_roundtrip() {
            let dir = tempdir().unwrap();
            let fsys = StandardFileSystem::new();
            let path = dir.path().join("out.php");

            fsys.write_file(&path, "<?php // generated").unwrap();
            assert_eq!(fsys.read_file(&path).unwrap(), "<?php // generated");
        }

        #[test]
        fn test_read_missing_file_is_io_error() {
            let dir = tempdir().unwrap();
            let fsys = StandardFileSystem::new();
            let result = fsys.read_file(&dir.path().join("nope.php"));
            assert!(matches!(result, Err(crate::Error::Io(_))));
        }

        #[test]
        fn test_create_dir_all_is_idempotent() {
            let dir = tempdir().unwrap();
            let fsys = StandardFileSystem::new();
            let nested = dir.path().join("a/b/c");

            fsys.create_dir_all(&nested).unwrap();
            fsys.create_dir_all(&nested).unwrap();
            assert!(fsys.is_dir(&nested));
        }

        #[test]
        fn test_list_dir_is_flat_and_sorted() {
            let dir = tempdir().unwrap();
            let fsys = StandardFileSystem::new();
            fsys.write_file(&dir.path().join("b.php"), "").unwrap();
            fsys.write_file(&dir.path().join("a.php"), "").unwrap();
            fsys.create_dir_all(&dir.path().join("sub")).unwrap();
            fsys.write_file(&dir.path().join("sub/deep.php"), "").unwrap();

            let names = fsys.list_dir(dir.path()).unwrap();
            assert_eq!(names, vec!["a.php", "b.php", "sub"]);
        }

        #[test]
        fn test_is_file_and_is_dir() {
            let dir = tempdir().unwrap();
            let fsys = StandardFileSystem::new();
            let file = dir.path().join("f.php");
            fsys.write_file(&file, "").unwrap();

            assert!(fsys.is_file(&file));
            assert!(!fsys.is_dir(&file));
            assert!(fsys.is_dir(dir.path()));
            assert!(!fsys.is_file(dir.path()));
        }
    }

    mod dry_run {
        use super::*;

        #[test]
        fn test_write_is_suppressed() {
            let dir = tempdir().unwrap();
            let fsys = DryRunFileSystem::new();
            let path = dir.path().join("out.php");

            fsys.write_file(&path, "content").unwrap();
            assert!(!path.exists());
        }

        #[test]
        fn test_create_dir_is_suppressed() {
            let dir = tempdir().unwrap();
            let fsys = DryRunFileSystem::new();
            let path = dir.path().join("components");

            fsys.create_dir_all(&path).unwrap();
            assert!(!path.exists());
        }

        #[test]
        fn test_reads_still_work() {
            let dir = tempdir().unwrap();
            std::fs::write(dir.path().join("in.php"), "real content").unwrap();

            let fsys = DryRunFileSystem::new();
            assert!(fsys.is_file(&dir.path().join("in.php")));
            assert_eq!(
                fsys.read_file(&dir.path().join("in.php")).unwrap(),
                "real content"
            );
            assert_eq!(fsys.list_dir(dir.path()).unwrap(), vec!["in.php"]);
        }
    }
}
