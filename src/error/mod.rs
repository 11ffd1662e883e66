//! Error handling
//!
//! Defines error types and handling for workflow runs.

pub mod handlers;
pub mod types;

pub use types::*;
