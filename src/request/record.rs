//! Request record
//!
//! The single value threaded through the workflow. Stages never mutate it in
//! place; the terminal stage returns a new record carrying the result.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::request::Action;

/// A filesystem request and, once a run has finished, its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    #[serde(with = "action_token")]
    action: Action,
    path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    result: Option<String>,
}

impl Request {
    pub fn new(action: impl Into<Action>, path: impl Into<PathBuf>) -> Self {
        Self {
            action: action.into(),
            path: path.into(),
            content: None,
            result: None,
        }
    }

    /// Attaches the payload used by `write`.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Returns a copy of this record with `result` set.
    ///
    /// Only the terminal stage of a run calls this, so a record leaving the
    /// workflow has its result written exactly once.
    pub fn with_result(self, result: impl Into<String>) -> Self {
        debug_assert!(self.result.is_none(), "result already set for {}", self.path.display());
        Self {
            result: Some(result.into()),
            ..self
        }
    }

    // --------------------
    // Getter methods
    // --------------------

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// The write payload; an absent payload truncates the file to empty.
    pub fn content_or_empty(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Consumes the record, handing back its result.
    pub fn into_result(self) -> Option<String> {
        self.result
    }
}

/// Serializes `Action` as the bare token string.
mod action_token {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::request::Action;

    pub fn serialize<S: Serializer>(action: &Action, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(action.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Action, D::Error> {
        String::deserialize(deserializer).map(Action::from)
    }
}
