// src/types.rs
//! Common data structures shared by the validator, replay, and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{Result, RouteGuardError};

/// A directed "can travel from source to target" connection.
///
/// Deserializes from the editor's edge objects; extra fields such as
/// `id` or `type` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    #[must_use]
    pub fn matches(&self, source: &str, target: &str) -> bool {
        self.source == source && self.target == target
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.source, self.target)
    }
}

/// A route graph snapshot as written by the editor's JSON export.
///
/// Only `edges` is read; `nodes`, `exportedAt` and anything else are
/// tolerated and dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteGraph {
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl RouteGraph {
    /// Parses a snapshot from JSON text.
    ///
    /// # Errors
    /// Returns `GraphSyntax` if the text is not a valid snapshot document.
    pub fn from_json_str(content: &str, origin: &Path) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| RouteGuardError::GraphSyntax {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Reads and parses a snapshot file.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read, `GraphSyntax` if it does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| RouteGuardError::io(e, path))?;
        Self::from_json_str(&content, path)
    }
}
