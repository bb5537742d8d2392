// src/route/validator.rs
//! Admission decision for a single candidate connection.

use std::sync::Arc;

use super::verdict::{Rejection, ValidationResult};
use crate::graph::can_reach;
use crate::rules::{RuleMatch, RuleSet};
use crate::types::Edge;

/// Decides whether a directed connection may join a route graph.
///
/// Holds only the injected rule set. The graph is passed in on every call,
/// so the validator cannot drift from the caller's state.
#[derive(Debug, Clone)]
pub struct RouteValidator {
    rules: Arc<RuleSet>,
}

impl Default for RouteValidator {
    fn default() -> Self {
        Self::new(Arc::new(RuleSet::empty()))
    }
}

impl RouteValidator {
    #[must_use]
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validates `source → target` against the snapshot `edges`.
    ///
    /// Checks run in order and the first failure wins: missing endpoint,
    /// duplicate edge, self-loop, static rules, cycle.
    #[must_use]
    pub fn validate(
        &self,
        edges: &[Edge],
        source: Option<&str>,
        target: Option<&str>,
    ) -> ValidationResult {
        let verdict = self.decide(edges, source, target);
        tracing::debug!(
            from = source.unwrap_or_default(),
            to = target.unwrap_or_default(),
            edges = edges.len(),
            outcome = verdict.rejection().map_or("ACCEPTED", Rejection::label),
            "validated connection"
        );
        verdict
    }

    /// Convenience for callers holding an `Edge`.
    #[must_use]
    pub fn validate_edge(&self, edges: &[Edge], candidate: &Edge) -> ValidationResult {
        self.validate(
            edges,
            Some(candidate.source.as_str()),
            Some(candidate.target.as_str()),
        )
    }

    fn decide(
        &self,
        edges: &[Edge],
        source: Option<&str>,
        target: Option<&str>,
    ) -> ValidationResult {
        let (Some(source), Some(target)) = (non_empty(source), non_empty(target)) else {
            return ValidationResult::Rejected(Rejection::MissingEndpoint);
        };

        match check(&self.rules, edges, source, target) {
            Some(rejection) => ValidationResult::Rejected(rejection),
            None => ValidationResult::Accepted,
        }
    }
}

fn non_empty(id: Option<&str>) -> Option<&str> {
    id.filter(|s| !s.is_empty())
}

fn check(rules: &RuleSet, edges: &[Edge], source: &str, target: &str) -> Option<Rejection> {
    if edges.iter().any(|e| e.matches(source, target)) {
        return Some(Rejection::Duplicate);
    }
    if source == target {
        return Some(Rejection::SelfLoop);
    }
    if let Some(hit) = rules.find_block(source, target) {
        return Some(match hit {
            RuleMatch::Directed { reason } => Rejection::Blocked { reason },
            RuleMatch::Undirected { reason } => Rejection::BlockedUndirected { reason },
        });
    }
    // The new edge closes a loop iff target already reaches source.
    if can_reach(edges, target, source) {
        return Some(Rejection::Cycle);
    }
    None
}
