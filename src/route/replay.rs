// src/route/replay.rs
//! Bulk import validation.
//!
//! Replays a sequence of candidate connections through the validator,
//! committing each accepted edge before the next decision, exactly as an
//! editor would if the user drew them one after another.

use serde::Serialize;

use super::validator::RouteValidator;
use super::verdict::{Rejection, ValidationResult};
use crate::types::Edge;

/// A candidate that was refused, with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedEdge {
    pub index: usize,
    pub edge: Edge,
    pub rejection: Rejection,
}

/// Result of replaying candidates onto a starting snapshot.
#[derive(Debug, Default, Serialize)]
pub struct ReplayReport {
    accepted: Vec<Edge>,
    rejected: Vec<RejectedEdge>,
    edges: Vec<Edge>,
}

impl ReplayReport {
    /// Candidates that were committed, in input order.
    #[must_use]
    pub fn accepted(&self) -> &[Edge] {
        &self.accepted
    }

    #[must_use]
    pub fn rejected(&self) -> &[RejectedEdge] {
        &self.rejected
    }

    /// The final snapshot: the initial edges followed by accepted candidates.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// True when no candidate was refused with a user-facing reason.
    /// Silent rejections (duplicates, missing endpoints) do not count.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.iter().all(|r| r.rejection.is_silent())
    }

    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

impl RouteValidator {
    /// Validates `candidates` in order against `initial` plus every candidate
    /// accepted so far.
    #[must_use]
    pub fn replay<I>(&self, candidates: I, initial: Vec<Edge>) -> ReplayReport
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut report = ReplayReport {
            edges: initial,
            ..ReplayReport::default()
        };

        for (index, edge) in candidates.into_iter().enumerate() {
            match self.validate_edge(&report.edges, &edge) {
                ValidationResult::Accepted => {
                    report.edges.push(edge.clone());
                    report.accepted.push(edge);
                }
                ValidationResult::Rejected(rejection) => {
                    report.rejected.push(RejectedEdge {
                        index,
                        edge,
                        rejection,
                    });
                }
            }
        }

        tracing::info!(
            accepted = report.accepted.len(),
            rejected = report.rejected.len(),
            "replay finished"
        );
        report
    }
}
