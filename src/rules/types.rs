// src/rules/types.rs
//! Blocked-route rule types.

use serde::{Deserialize, Serialize};

/// Document shape shared by the JSON and TOML rule formats.
///
/// Fields of individual entries are optional here so the loader can name
/// the exact entry that is malformed instead of surfacing a bare serde error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawRuleDocument {
    pub blocked: Vec<RawDirectedRule>,
    #[serde(default)]
    pub blocked_undirected: Option<Vec<Vec<String>>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDirectedRule {
    pub from: Option<String>,
    pub to: Option<String>,
    pub reason: Option<String>,
}

/// Forbids exactly one direction of travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectedRule {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl DirectedRule {
    #[must_use]
    pub fn matches(&self, source: &str, target: &str) -> bool {
        self.from == source && self.to == target
    }

    /// The configured reason, or `"<from> → <to> is blocked"`.
    #[must_use]
    pub fn message(&self) -> String {
        self.reason
            .clone()
            .unwrap_or_else(|| format!("{} → {} is blocked", self.from, self.to))
    }
}

/// Forbids travel between two countries in either direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UndirectedRule {
    pub a: String,
    pub b: String,
}

impl UndirectedRule {
    #[must_use]
    pub fn matches(&self, source: &str, target: &str) -> bool {
        (self.a == source && self.b == target) || (self.a == target && self.b == source)
    }
}

/// Outcome of consulting the rule set for one candidate connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleMatch {
    Directed { reason: String },
    Undirected { reason: String },
}

impl RuleMatch {
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::Directed { reason } | Self::Undirected { reason } => reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_rule_is_one_way() {
        let rule = DirectedRule {
            from: "ESP".into(),
            to: "GRC".into(),
            reason: None,
        };
        assert!(rule.matches("ESP", "GRC"));
        assert!(!rule.matches("GRC", "ESP"));
        assert_eq!(rule.message(), "ESP → GRC is blocked");
    }

    #[test]
    fn test_undirected_rule_matches_both_ways() {
        let rule = UndirectedRule {
            a: "ARM".into(),
            b: "AZE".into(),
        };
        assert!(rule.matches("ARM", "AZE"));
        assert!(rule.matches("AZE", "ARM"));
        assert!(!rule.matches("ARM", "GEO"));
    }
}
