// src/graph/reach.rs
//! Adjacency construction and directed reachability.

use std::collections::{HashMap, HashSet};

use crate::types::Edge;

/// Source identifier -> targets, in the order the edges were given.
pub type Adjacency<'a> = HashMap<&'a str, Vec<&'a str>>;

/// Builds the adjacency map for a snapshot. Borrowed from `edges`, rebuilt
/// per call.
#[must_use]
pub fn adjacency(edges: &[Edge]) -> Adjacency<'_> {
    let mut map: Adjacency<'_> = HashMap::new();
    for edge in edges {
        map.entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }
    map
}

/// Returns true if `to` is reachable from `from` over zero or more edges.
///
/// Depth-first with an explicit stack and a visited set, so it terminates on
/// graphs that already contain cycles and cannot exhaust the call stack.
#[must_use]
pub fn can_reach(edges: &[Edge], from: &str, to: &str) -> bool {
    if from == to {
        return true;
    }
    let adjacency = adjacency(edges);
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack = vec![from];

    while let Some(current) = stack.pop() {
        if current == to {
            return true;
        }
        if !visited.insert(current) {
            continue;
        }
        if let Some(neighbors) = adjacency.get(current) {
            stack.extend(
                neighbors
                    .iter()
                    .rev()
                    .filter(|n| !visited.contains(*n)),
            );
        }
    }
    false
}
