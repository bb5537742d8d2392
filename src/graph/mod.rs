// src/graph/mod.rs
//! Directed route graph algorithms: reachability and cycle detection.

pub mod cycles;
pub mod reach;

pub use cycles::detect_cycles;
pub use reach::{adjacency, can_reach, Adjacency};
