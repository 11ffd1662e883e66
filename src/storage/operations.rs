//! Storage operations
//!
//! The four filesystem primitives behind the workflow: read, create, delete
//! and write. Each takes the storage root and the caller's path, and answers
//! with a status message. A missing file is reported in the message; only
//! genuine I/O faults come back as `Err`.

use log::{error, info};
use std::fs::{self, OpenOptions};
use std::path::Path;

use crate::error::StorageError;
use crate::storage::filesystem::{path_exists, resolve_path};

/// Reads a file's contents as text
pub fn read_file(root: &Path, path: &Path) -> Result<String, StorageError> {
    let real_path = resolve_path(root, path);

    if !path_exists(&real_path) {
        info!("Read skipped, {} (real: {}) not found", path.display(), real_path.display());
        return Ok(format!("File not found: {}", path.display()));
    }

    match fs::read_to_string(&real_path) {
        Ok(contents) => {
            info!(
                "Read {} (real: {}) - {} bytes",
                path.display(),
                real_path.display(),
                contents.len()
            );
            Ok(contents)
        }
        Err(e) => {
            error!(
                "Failed to read file {} (real: {}): {}",
                path.display(),
                real_path.display(),
                e
            );
            Err(StorageError::ReadFailed(path.to_path_buf(), e))
        }
    }
}

/// Creates an empty file, leaving an existing one untouched
pub fn create_file(root: &Path, path: &Path) -> Result<String, StorageError> {
    let real_path = resolve_path(root, path);

    // append mode never truncates
    match OpenOptions::new().create(true).append(true).open(&real_path) {
        Ok(_) => {
            info!("Created file {} (real: {})", path.display(), real_path.display());
            Ok(format!("File created at {}", path.display()))
        }
        Err(e) => {
            error!(
                "Failed to create file {} (real: {}): {}",
                path.display(),
                real_path.display(),
                e
            );
            Err(StorageError::CreateFailed(path.to_path_buf(), e))
        }
    }
}

/// Deletes a file
pub fn delete_file(root: &Path, path: &Path) -> Result<String, StorageError> {
    let real_path = resolve_path(root, path);

    if !path_exists(&real_path) {
        info!("Delete skipped, {} (real: {}) not found", path.display(), real_path.display());
        return Ok(format!("File does not exist: {}", path.display()));
    }

    match fs::remove_file(&real_path) {
        Ok(()) => {
            info!("Deleted file {} (real: {})", path.display(), real_path.display());
            Ok(format!("File deleted: {}", path.display()))
        }
        Err(e) => {
            error!(
                "Failed to delete file {} (real: {}): {}",
                path.display(),
                real_path.display(),
                e
            );
            Err(StorageError::DeleteFailed(path.to_path_buf(), e))
        }
    }
}

/// Overwrites a file with `content`
///
/// The parent directory must already exist.
pub fn write_file(root: &Path, path: &Path, content: &str) -> Result<String, StorageError> {
    let real_path = resolve_path(root, path);

    match fs::write(&real_path, content) {
        Ok(()) => {
            info!(
                "Wrote {} bytes to {} (real: {})",
                content.len(),
                path.display(),
                real_path.display()
            );
            Ok(format!("Content written to {}", path.display()))
        }
        Err(e) => {
            error!(
                "Failed to write file {} (real: {}): {}",
                path.display(),
                real_path.display(),
                e
            );
            Err(StorageError::WriteFailed(path.to_path_buf(), e))
        }
    }
}
