// src/rules/loader.rs
//! Parsing and structural validation of blocked-route documents.
//!
//! Any malformed entry aborts the load. A silently dropped rule would let a
//! forbidden route through, so nothing here is lenient.

use std::path::Path;

use super::types::{DirectedRule, RawDirectedRule, RawRuleDocument, UndirectedRule};
use crate::error::{Result, RouteGuardError};

const BLOCKED: &str = "blocked";
const BLOCKED_UNDIRECTED: &str = "blockedUndirected";

/// Rule document encodings understood by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFormat {
    Json,
    Toml,
}

impl RuleFormat {
    /// `.toml` files are TOML; everything else is read as JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

pub(crate) fn parse(
    content: &str,
    format: RuleFormat,
    origin: &Path,
) -> Result<(Vec<DirectedRule>, Vec<UndirectedRule>)> {
    let raw = decode(content, format, origin)?;
    let directed = raw
        .blocked
        .into_iter()
        .enumerate()
        .map(|(index, rule)| directed_rule(index, rule))
        .collect::<Result<Vec<_>>>()?;
    let undirected = raw
        .blocked_undirected
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, pair)| undirected_rule(index, pair))
        .collect::<Result<Vec<_>>>()?;
    Ok((directed, undirected))
}

fn decode(content: &str, format: RuleFormat, origin: &Path) -> Result<RawRuleDocument> {
    let syntax = |message: String| RouteGuardError::RulesSyntax {
        path: origin.to_path_buf(),
        message,
    };
    match format {
        RuleFormat::Json => serde_json::from_str(content).map_err(|e| syntax(e.to_string())),
        RuleFormat::Toml => toml::from_str(content).map_err(|e| syntax(e.to_string())),
    }
}

fn directed_rule(index: usize, raw: RawDirectedRule) -> Result<DirectedRule> {
    let from = required_id(BLOCKED, index, "from", raw.from)?;
    let to = required_id(BLOCKED, index, "to", raw.to)?;
    Ok(DirectedRule {
        from,
        to,
        // A blank reason falls back to the synthesized message.
        reason: raw.reason.filter(|r| !r.trim().is_empty()),
    })
}

fn required_id(
    section: &'static str,
    index: usize,
    field: &str,
    value: Option<String>,
) -> Result<String> {
    match value {
        None => Err(malformed(section, index, format!("missing `{field}`"))),
        Some(id) if id.trim().is_empty() => {
            Err(malformed(section, index, format!("`{field}` is empty")))
        }
        Some(id) => Ok(id),
    }
}

fn undirected_rule(index: usize, pair: Vec<String>) -> Result<UndirectedRule> {
    let [a, b]: [String; 2] = pair.try_into().map_err(|p: Vec<String>| {
        malformed(
            BLOCKED_UNDIRECTED,
            index,
            format!("expected exactly 2 identifiers, found {}", p.len()),
        )
    })?;
    if a.trim().is_empty() || b.trim().is_empty() {
        return Err(malformed(BLOCKED_UNDIRECTED, index, "empty identifier".into()));
    }
    if a == b {
        return Err(malformed(
            BLOCKED_UNDIRECTED,
            index,
            format!("pair names `{a}` twice"),
        ));
    }
    Ok(UndirectedRule { a, b })
}

fn malformed(section: &'static str, index: usize, detail: String) -> RouteGuardError {
    RouteGuardError::MalformedRule {
        section,
        index,
        detail,
    }
}
