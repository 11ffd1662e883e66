//! Error types
//!
//! Defines the faults that can abort a workflow run. Absent files are not
//! errors; they come back from storage as ordinary status messages.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    ReadFailed(PathBuf, io::Error),
    CreateFailed(PathBuf, io::Error),
    DeleteFailed(PathBuf, io::Error),
    WriteFailed(PathBuf, io::Error),
}

impl StorageError {
    /// Path of the request that hit the fault, as the caller gave it.
    pub fn path(&self) -> &Path {
        match self {
            StorageError::ReadFailed(p, _)
            | StorageError::CreateFailed(p, _)
            | StorageError::DeleteFailed(p, _)
            | StorageError::WriteFailed(p, _) => p,
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        match self {
            StorageError::ReadFailed(_, e)
            | StorageError::CreateFailed(_, e)
            | StorageError::DeleteFailed(_, e)
            | StorageError::WriteFailed(_, e) => e.kind(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadFailed(p, e) => write!(f, "Failed to read {}: {}", p.display(), e),
            StorageError::CreateFailed(p, e) => {
                write!(f, "Failed to create {}: {}", p.display(), e)
            }
            StorageError::DeleteFailed(p, e) => {
                write!(f, "Failed to delete {}: {}", p.display(), e)
            }
            StorageError::WriteFailed(p, e) => {
                write!(f, "Failed to write {}: {}", p.display(), e)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::ReadFailed(_, e)
            | StorageError::CreateFailed(_, e)
            | StorageError::DeleteFailed(_, e)
            | StorageError::WriteFailed(_, e) => Some(e),
        }
    }
}

/// Top-level error for a single invocation
#[derive(Debug)]
pub enum FlowError {
    Storage(StorageError),
    Config(config::ConfigError),
    InvalidRequest(serde_json::Error),
    MissingArgument(&'static str),
    Output(serde_json::Error),
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowError::Storage(e) => write!(f, "Storage error: {}", e),
            FlowError::Config(e) => write!(f, "Configuration error: {}", e),
            FlowError::InvalidRequest(e) => write!(f, "Invalid request: {}", e),
            FlowError::MissingArgument(name) => write!(f, "Missing argument: {}", name),
            FlowError::Output(e) => write!(f, "Failed to render result: {}", e),
        }
    }
}

impl std::error::Error for FlowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FlowError::Storage(e) => Some(e),
            FlowError::Config(e) => Some(e),
            FlowError::InvalidRequest(e) | FlowError::Output(e) => Some(e),
            FlowError::MissingArgument(_) => None,
        }
    }
}

impl From<StorageError> for FlowError {
    fn from(error: StorageError) -> Self {
        FlowError::Storage(error)
    }
}

impl From<config::ConfigError> for FlowError {
    fn from(error: config::ConfigError) -> Self {
        FlowError::Config(error)
    }
}
