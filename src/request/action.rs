//! Module `action`
//!
//! Defines the closed set of actions a request can carry and the parsing
//! logic that maps a raw token onto it.

use std::fmt;

/// Represents the operation a request asks for.
///
/// Each recognized variant maps onto one filesystem primitive. Any other
/// token is kept verbatim in `Unknown` so the router can echo it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Read,
    Write,
    Create,
    Delete,
    Unknown(String), // Unrecognized token, kept as received
}

impl Action {
    /// Parses a raw action token.
    ///
    /// Matching is exact and case-sensitive: `"READ"` or `"creat"` are `Unknown`.
    pub fn parse(raw: &str) -> Action {
        match raw {
            "read" => Action::Read,
            "write" => Action::Write,
            "create" => Action::Create,
            "delete" => Action::Delete,
            other => Action::Unknown(other.to_string()),
        }
    }

    /// Returns the token this action was parsed from.
    pub fn as_str(&self) -> &str {
        match self {
            Action::Read => "read",
            Action::Write => "write",
            Action::Create => "create",
            Action::Delete => "delete",
            Action::Unknown(raw) => raw,
        }
    }

    pub fn is_write(&self) -> bool {
        matches!(self, Action::Write)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Action {
    fn from(raw: String) -> Self {
        Action::parse(&raw)
    }
}

impl From<&str> for Action {
    fn from(raw: &str) -> Self {
        Action::parse(raw)
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        match action {
            Action::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}
