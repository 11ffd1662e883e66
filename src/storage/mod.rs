//! File system storage
//!
//! The `FileOps` contract the workflow dispatches to, and its local-disk
//! implementation.

pub mod filesystem;
pub mod operations;

use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Filesystem primitives available to the workflow.
///
/// Every operation answers with a human-readable message (or, for `read`, the
/// file's contents). A missing file is an ordinary answer, not an error.
pub trait FileOps {
    fn read(&self, path: &Path) -> Result<String, StorageError>;
    fn create(&self, path: &Path) -> Result<String, StorageError>;
    fn delete(&self, path: &Path) -> Result<String, StorageError>;
    fn write(&self, path: &Path, content: &str) -> Result<String, StorageError>;
    fn exists(&self, path: &Path) -> bool;
}

/// `FileOps` backed by the local disk, with relative paths anchored at `root`.
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: PathBuf,
}

impl LocalFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new(".")
    }
}

impl FileOps for LocalFs {
    fn read(&self, path: &Path) -> Result<String, StorageError> {
        operations::read_file(&self.root, path)
    }

    fn create(&self, path: &Path) -> Result<String, StorageError> {
        operations::create_file(&self.root, path)
    }

    fn delete(&self, path: &Path) -> Result<String, StorageError> {
        operations::delete_file(&self.root, path)
    }

    fn write(&self, path: &Path, content: &str) -> Result<String, StorageError> {
        operations::write_file(&self.root, path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        filesystem::path_exists(&filesystem::resolve_path(&self.root, path))
    }
}
