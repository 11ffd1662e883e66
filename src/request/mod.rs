//! Request data model
//!
//! Defines the action vocabulary and the request record passed between
//! workflow stages.

pub mod action;
pub mod record;

pub use action::Action;
pub use record::Request;
