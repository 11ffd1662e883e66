pub mod cli;
pub mod config;
pub mod error;
pub mod request;
pub mod storage;
pub mod utils;
pub mod workflow;

pub use request::{Action, Request};
pub use storage::{FileOps, LocalFs};
pub use workflow::Workflow;
