// src/route/mod.rs
//! Route-validation engine.
//!
//! Decides whether a candidate connection may be added to a route graph and
//! explains refusals. Pure: no I/O, no state between calls.

pub mod replay;
pub mod validator;
pub mod verdict;

pub use replay::{RejectedEdge, ReplayReport};
pub use validator::RouteValidator;
pub use verdict::{Rejection, ValidationResult, CYCLE_REASON, SELF_LOOP_REASON};
