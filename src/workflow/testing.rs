//! In-memory `FileOps` double that records every call.

use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::storage::FileOps;

#[derive(Default)]
pub struct RecordingOps {
    calls: RefCell<Vec<String>>,
    existing: RefCell<HashSet<PathBuf>>,
    fail: bool,
}

impl RecordingOps {
    pub fn with_existing(paths: &[&str]) -> Self {
        let ops = Self::default();
        ops.existing
            .borrow_mut()
            .extend(paths.iter().map(PathBuf::from));
        ops
    }

    /// Every mutating call fails with `PermissionDenied`.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) -> String {
        self.calls.borrow_mut().push(call.clone());
        call
    }

    fn denied() -> io::Error {
        io::Error::new(io::ErrorKind::PermissionDenied, "denied")
    }
}

impl FileOps for RecordingOps {
    fn read(&self, path: &Path) -> Result<String, StorageError> {
        Ok(self.record(format!("read {}", path.display())))
    }

    fn create(&self, path: &Path) -> Result<String, StorageError> {
        if self.fail {
            return Err(StorageError::CreateFailed(path.to_path_buf(), Self::denied()));
        }
        self.existing.borrow_mut().insert(path.to_path_buf());
        Ok(self.record(format!("create {}", path.display())))
    }

    fn delete(&self, path: &Path) -> Result<String, StorageError> {
        if self.fail {
            return Err(StorageError::DeleteFailed(path.to_path_buf(), Self::denied()));
        }
        self.existing.borrow_mut().remove(path);
        Ok(self.record(format!("delete {}", path.display())))
    }

    fn write(&self, path: &Path, content: &str) -> Result<String, StorageError> {
        if self.fail {
            return Err(StorageError::WriteFailed(path.to_path_buf(), Self::denied()));
        }
        Ok(self.record(format!("write {} {}", path.display(), content)))
    }

    fn exists(&self, path: &Path) -> bool {
        self.existing.borrow().contains(path)
    }
}
