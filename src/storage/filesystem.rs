//! File system helpers
//!
//! Path resolution and existence checks shared by the storage operations.

use std::path::{Path, PathBuf};

/// Resolve a request path against the storage root.
///
/// Absolute paths are returned as given; relative ones are joined onto `root`.
pub fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Check if something exists at `path`, following symlinks
pub fn path_exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        let resolved = resolve_path(Path::new("/srv/data"), Path::new("notes/a.txt"));
        assert_eq!(resolved, PathBuf::from("/srv/data/notes/a.txt"));
    }

    #[test]
    fn test_resolve_absolute_path_is_untouched() {
        let resolved = resolve_path(Path::new("/srv/data"), Path::new("/tmp/a.txt"));
        assert_eq!(resolved, PathBuf::from("/tmp/a.txt"));
    }

    #[test]
    fn test_path_exists() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("present.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(path_exists(&file));
        assert!(path_exists(dir.path()));
        assert!(!path_exists(&dir.path().join("absent.txt")));
    }
}
