//! Workflow state machine
//!
//! Two working stages and a terminal marker:
//!
//! ```text
//! ENTRY -> Router --(write)--> WriteStage -> Terminal
//!                 \--(other)-------------->  Terminal
//! ```

use std::fmt;

use crate::request::Action;

/// A node of the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Router,
    WriteStage,
    Terminal, // No-op marker: nothing left to run
}

impl Stage {
    /// Every run starts at the router.
    pub const ENTRY: Stage = Stage::Router;

    /// The stage to run after this one, given the request's action.
    ///
    /// `None` once the run has reached `Terminal`.
    pub fn next(self, action: &Action) -> Option<Stage> {
        match self {
            Stage::Router if action.is_write() => Some(Stage::WriteStage),
            Stage::Router => Some(Stage::Terminal),
            Stage::WriteStage => Some(Stage::Terminal),
            Stage::Terminal => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Router => "router",
            Stage::WriteStage => "write_stage",
            Stage::Terminal => "terminal",
        };
        f.write_str(name)
    }
}
