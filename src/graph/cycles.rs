// src/graph/cycles.rs
//! Cycle detection for whole route graphs.
//!
//! The validator never lets a cycle in, but a snapshot read from disk may have
//! been edited by hand. This module finds the cycles such a snapshot contains
//! using an iterative Depth-First Search.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::types::Edge;

/// Detects cycles in a route graph.
/// Returns a list of cycles, each the node path closed by repeating its first node.
#[must_use]
pub fn detect_cycles(edges: &[Edge]) -> Vec<Vec<String>> {
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut nodes = BTreeSet::new();

    for edge in edges {
        adjacency
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
        nodes.insert(edge.source.as_str());
        nodes.insert(edge.target.as_str());
    }

    // To ensure deterministic output for testing
    for neighbors in adjacency.values_mut() {
        neighbors.sort_unstable();
        neighbors.dedup();
    }

    let mut state = DfsState::default();
    for node in nodes {
        if !state.visited.contains(node) {
            dfs(node, &adjacency, &mut state);
        }
    }

    state.cycles
}

#[derive(Default)]
struct DfsState<'a> {
    visited: HashSet<&'a str>,
    on_path: HashSet<&'a str>,
    path: Vec<&'a str>,
    cycles: Vec<Vec<String>>,
}

/// One frame of the explicit DFS stack: a node and the index of the next
/// neighbour to look at.
struct Frame<'a> {
    node: &'a str,
    next: usize,
}

fn dfs<'a>(start: &'a str, adjacency: &HashMap<&'a str, Vec<&'a str>>, state: &mut DfsState<'a>) {
    enter(start, state);
    let mut stack = vec![Frame { node: start, next: 0 }];

    while let Some(frame) = stack.last_mut() {
        let neighbor = adjacency
            .get(frame.node)
            .and_then(|n| n.get(frame.next))
            .copied();
        frame.next += 1;

        match neighbor {
            Some(next) if !state.visited.contains(next) => {
                enter(next, state);
                stack.push(Frame { node: next, next: 0 });
            }
            Some(next) if state.on_path.contains(next) => record_cycle(next, state),
            Some(_) => {}
            None => {
                if let Some(done) = stack.pop() {
                    state.on_path.remove(done.node);
                    state.path.pop();
                }
            }
        }
    }
}

fn enter<'a>(node: &'a str, state: &mut DfsState<'a>) {
    state.visited.insert(node);
    state.on_path.insert(node);
    state.path.push(node);
}

fn record_cycle(neighbor: &str, state: &mut DfsState<'_>) {
    if let Some(pos) = state.path.iter().position(|x| *x == neighbor) {
        let mut cycle: Vec<String> = state.path.iter().skip(pos).map(ToString::to_string).collect();
        cycle.push(neighbor.to_string()); // Close the loop visually
        state.cycles.push(cycle);
    }
}
