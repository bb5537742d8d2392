// src/cli/handlers.rs
//! Command handlers. Each one loads its inputs, asks the engine for a
//! decision, reports it, and maps the outcome to an exit code.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::args::OutputFormat;
use super::report::{self, AuditResult};
use crate::config::Config;
use crate::events::{EventKind, EventLogger};
use crate::exit::RouteGuardExit;
use crate::graph::detect_cycles;
use crate::route::{RouteValidator, ValidationResult};
use crate::rules::RuleSet;
use crate::types::{Edge, RouteGraph};

/// Shared state for one CLI invocation.
pub struct Session {
    pub config: Config,
    pub events: EventLogger,
}

impl Session {
    /// Loads configuration from `config_dir` and applies output preferences.
    ///
    /// # Errors
    /// Returns error if `routeguard.toml` exists but is invalid.
    pub fn open(config_dir: &Path) -> Result<Self> {
        let config = Config::load_from(config_dir)
            .with_context(|| format!("loading config from {}", config_dir.display()))?;
        if !config.preferences.color {
            colored::control::set_override(false);
        }
        let events = if config.preferences.event_log {
            EventLogger::new(&config.event_log_path())
        } else {
            EventLogger::disabled()
        };
        Ok(Self { config, events })
    }

    /// Loads the rule set once for this invocation.
    ///
    /// An explicit `--rules` file or a configured path must exist. When
    /// neither was given and the default document is absent, no routes
    /// are blocked.
    ///
    /// # Errors
    /// Returns error if the rule document cannot be read or is malformed.
    pub fn load_rules(&self, explicit: Option<&Path>) -> Result<Arc<RuleSet>> {
        let path = explicit.map_or_else(|| self.config.rules_path(), Path::to_path_buf);
        let implicit = explicit.is_none() && self.config.rules.path.is_none();
        if implicit && !path.exists() {
            tracing::warn!(path = %path.display(), "no rule document found, nothing is blocked");
            return Ok(Arc::new(RuleSet::empty()));
        }

        let rules = RuleSet::load(&path)
            .with_context(|| format!("loading rules from {}", path.display()))?;
        self.events.log(EventKind::RulesLoaded {
            path: path.display().to_string(),
            directed: rules.directed().len(),
            undirected: rules.undirected().len(),
        });
        Ok(Arc::new(rules))
    }

    fn validator(&self, explicit: Option<&Path>) -> Result<RouteValidator> {
        Ok(RouteValidator::new(self.load_rules(explicit)?))
    }
}

fn load_graph(path: &Path) -> Result<RouteGraph> {
    RouteGraph::load(path).with_context(|| format!("reading graph {}", path.display()))
}

/// Handles `routeguard check`.
///
/// # Errors
/// Returns error if the rules or the graph cannot be loaded.
pub fn handle_check(
    session: &Session,
    source: &str,
    target: &str,
    graph: Option<&Path>,
    rules: Option<&Path>,
    format: OutputFormat,
) -> Result<RouteGuardExit> {
    let validator = session.validator(rules)?;
    let edges = match graph {
        Some(path) => load_graph(path)?.edges,
        None => Vec::new(),
    };

    let verdict = validator.validate(&edges, Some(source), Some(target));
    session.events.log(decision_event(source, target, &verdict));
    report::print_verdict(source, target, &verdict, format)?;

    Ok(match verdict.rejection() {
        None => RouteGuardExit::Success,
        Some(r) if r.is_silent() => RouteGuardExit::SilentReject,
        Some(_) => RouteGuardExit::Rejected,
    })
}

fn decision_event(source: &str, target: &str, verdict: &ValidationResult) -> EventKind {
    match verdict.rejection() {
        None => EventKind::ConnectionAccepted {
            source: source.to_string(),
            target: target.to_string(),
        },
        Some(rejection) => EventKind::ConnectionRejected {
            source: source.to_string(),
            target: target.to_string(),
            kind: rejection.label().to_string(),
            reason: rejection.reason().map(ToString::to_string),
        },
    }
}

/// Handles `routeguard replay`.
///
/// # Errors
/// Returns error if the rules or either graph cannot be loaded.
pub fn handle_replay(
    session: &Session,
    file: &Path,
    onto: Option<&Path>,
    rules: Option<&Path>,
    format: OutputFormat,
) -> Result<RouteGuardExit> {
    let validator = session.validator(rules)?;
    let candidates = load_graph(file)?.edges;
    let initial: Vec<Edge> = match onto {
        Some(path) => load_graph(path)?.edges,
        None => Vec::new(),
    };

    let replay = validator.replay(candidates, initial);
    session.events.log(EventKind::ReplayFinished {
        accepted: replay.accepted().len(),
        rejected: replay.rejected().len(),
    });
    report::print_replay(&replay, format)?;

    Ok(if replay.is_clean() {
        RouteGuardExit::Success
    } else {
        RouteGuardExit::Rejected
    })
}

/// Handles `routeguard audit`. Files are audited in parallel and reported in
/// argument order.
///
/// # Errors
/// Returns error if any graph file cannot be loaded.
pub fn handle_audit(
    session: &Session,
    files: &[PathBuf],
    format: OutputFormat,
) -> Result<RouteGuardExit> {
    let results = files
        .par_iter()
        .map(|path| -> Result<AuditResult> {
            let graph = load_graph(path)?;
            Ok(AuditResult {
                path: path.clone(),
                edges: graph.edges.len(),
                cycles: detect_cycles(&graph.edges),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    for result in &results {
        session.events.log(EventKind::AuditFinished {
            path: result.path.display().to_string(),
            cycles: result.cycles.len(),
        });
    }
    report::print_audit(&results, format)?;

    Ok(if results.iter().all(|r| r.cycles.is_empty()) {
        RouteGuardExit::Success
    } else {
        RouteGuardExit::Rejected
    })
}

/// Handles `routeguard rules`.
///
/// # Errors
/// Returns error if the rule document cannot be loaded.
pub fn handle_rules(
    session: &Session,
    rules: Option<&Path>,
    format: OutputFormat,
) -> Result<RouteGuardExit> {
    let rules = session.load_rules(rules)?;
    report::print_rules(&rules, format)?;
    Ok(RouteGuardExit::Success)
}
