//! Error handlers
//!
//! Reports fatal errors and maps them onto process exit codes.

use crate::error::types::FlowError;
use log::error;

/// Log a fatal error
pub fn handle_error(err: &FlowError) {
    error!("fsflow error: {}", err);
}

/// Convert error to process exit code (sysexits-style where one fits)
pub fn exit_code(err: &FlowError) -> u8 {
    match err {
        FlowError::Storage(_) => 1,
        FlowError::Config(_) => 2,
        FlowError::InvalidRequest(_) | FlowError::MissingArgument(_) => 64,
        FlowError::Output(_) => 74,
    }
}
