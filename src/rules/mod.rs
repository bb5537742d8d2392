// src/rules/mod.rs
//! Blocked-route rule set.
//!
//! Rules are parsed once, validated structurally, and then shared read-only
//! (typically behind an `Arc`) by every validation call. There is no
//! mutation API.

pub mod loader;
pub mod types;

use std::path::Path;

use serde::Serialize;

use crate::error::{Result, RouteGuardError};
pub use loader::RuleFormat;
pub use types::{DirectedRule, RuleMatch, UndirectedRule};

/// Immutable collection of directed and undirected block rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    #[serde(rename = "blocked")]
    directed: Vec<DirectedRule>,
    #[serde(rename = "blockedUndirected")]
    undirected: Vec<UndirectedRule>,
}

impl RuleSet {
    /// A rule set that blocks nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a JSON rule document.
    ///
    /// # Errors
    /// Returns `RulesSyntax` or `MalformedRule` if the document is invalid.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::parse(content, RuleFormat::Json, Path::new("<inline>"))
    }

    /// Parses a TOML rule document using the same keys as the JSON format.
    ///
    /// # Errors
    /// Returns `RulesSyntax` or `MalformedRule` if the document is invalid.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, RuleFormat::Toml, Path::new("<inline>"))
    }

    /// Reads a rule document from disk, picking the format from the extension.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read, otherwise any parse error.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| RouteGuardError::io(e, path))?;
        let rules = Self::parse(&content, RuleFormat::from_path(path), path)?;
        tracing::info!(
            path = %path.display(),
            directed = rules.directed.len(),
            undirected = rules.undirected.len(),
            "loaded blocked-route rules"
        );
        Ok(rules)
    }

    fn parse(content: &str, format: RuleFormat, origin: &Path) -> Result<Self> {
        let (directed, undirected) = loader::parse(content, format, origin)?;
        Ok(Self {
            directed,
            undirected,
        })
    }

    #[must_use]
    pub fn directed(&self) -> &[DirectedRule] {
        &self.directed
    }

    #[must_use]
    pub fn undirected(&self) -> &[UndirectedRule] {
        &self.undirected
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directed.is_empty() && self.undirected.is_empty()
    }

    /// Finds the rule blocking `source → target`, if any.
    ///
    /// Directed rules are consulted first, in document order; a rule for the
    /// reverse direction never matches. Undirected rules match either way.
    #[must_use]
    pub fn find_block(&self, source: &str, target: &str) -> Option<RuleMatch> {
        if let Some(rule) = self.directed.iter().find(|r| r.matches(source, target)) {
            return Some(RuleMatch::Directed {
                reason: rule.message(),
            });
        }
        self.undirected
            .iter()
            .any(|r| r.matches(source, target))
            .then(|| RuleMatch::Undirected {
                reason: format!("{source} ↔ {target} is blocked"),
            })
    }
}
