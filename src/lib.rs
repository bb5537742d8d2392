//! Route-validation engine for directed country route graphs.
//!
//! [`route::RouteValidator`] decides whether a proposed connection may join
//! a graph snapshot, applying blocked-route rules ([`rules::RuleSet`]) and
//! cycle prevention. The [`cli`] module hosts it behind the `routeguard`
//! binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod exit;
pub mod graph;
pub mod route;
pub mod rules;
pub mod types;

pub use error::{Result, RouteGuardError};
pub use route::{Rejection, RouteValidator, ValidationResult};
pub use rules::RuleSet;
pub use types::Edge;
