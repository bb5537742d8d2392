// src/route/verdict.rs
//! Outcome types for a single connection decision.

use serde::Serialize;

pub const SELF_LOOP_REASON: &str = "A country cannot connect to itself.";
pub const CYCLE_REASON: &str = "This connection would create a loop. Cycles are not allowed.";

/// Decision for one candidate connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "rejection", rename_all = "snake_case")]
pub enum ValidationResult {
    Accepted,
    Rejected(Rejection),
}

impl ValidationResult {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The user-facing reason, if the connection was rejected with one.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Accepted => None,
            Self::Rejected(rejection) => rejection.reason(),
        }
    }

    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Accepted => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }
}

/// Why a connection was refused.
///
/// `MissingEndpoint` and `Duplicate` are silent: they carry no message and
/// the host is expected to drop them without telling the user anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    MissingEndpoint,
    Duplicate,
    SelfLoop,
    Blocked { reason: String },
    BlockedUndirected { reason: String },
    Cycle,
}

impl Rejection {
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::MissingEndpoint | Self::Duplicate => None,
            Self::SelfLoop => Some(SELF_LOOP_REASON),
            Self::Blocked { reason } | Self::BlockedUndirected { reason } => Some(reason.as_str()),
            Self::Cycle => Some(CYCLE_REASON),
        }
    }

    #[must_use]
    pub fn is_silent(&self) -> bool {
        self.reason().is_none()
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::MissingEndpoint => "MISSING_ENDPOINT",
            Self::Duplicate => "DUPLICATE",
            Self::SelfLoop => "SELF_LOOP",
            Self::Blocked { .. } => "BLOCKED",
            Self::BlockedUndirected { .. } => "BLOCKED_UNDIRECTED",
            Self::Cycle => "CYCLE",
        }
    }
}
