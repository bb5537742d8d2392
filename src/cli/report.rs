// src/cli/report.rs
//! Terminal and JSON output for CLI commands.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use super::args::OutputFormat;
use crate::route::{ReplayReport, ValidationResult};
use crate::rules::RuleSet;

/// Cycles found in one audited graph file.
#[derive(Debug, Serialize)]
pub struct AuditResult {
    pub path: PathBuf,
    pub edges: usize,
    pub cycles: Vec<Vec<String>>,
}

/// Prints any serializable value as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}

#[derive(Serialize)]
struct VerdictView<'a> {
    source: &'a str,
    target: &'a str,
    accepted: bool,
    kind: Option<&'static str>,
    reason: Option<&'a str>,
}

/// Prints the decision for one connection.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_verdict(
    source: &str,
    target: &str,
    verdict: &ValidationResult,
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&VerdictView {
            source,
            target,
            accepted: verdict.is_accepted(),
            kind: verdict.rejection().map(|r| r.label()),
            reason: verdict.reason(),
        });
    }

    let route = format!("{source} → {target}");
    match verdict.rejection() {
        None => println!("{} {route}", "✓ accepted".green().bold()),
        Some(rejection) => match rejection.reason() {
            Some(reason) => println!("{} {route}: {reason}", "✗ rejected".red().bold()),
            None => println!(
                "{}",
                format!("· ignored {route} ({})", rejection.label().to_lowercase()).dimmed()
            ),
        },
    }
    Ok(())
}

/// Prints a replay summary followed by every refused candidate.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_replay(report: &ReplayReport, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(report);
    }

    for refused in report.rejected() {
        let line = format!("#{} {}", refused.index, refused.edge);
        match refused.rejection.reason() {
            Some(reason) => println!("  {} {line}: {reason}", "✗".red()),
            None => println!(
                "  {}",
                format!("· {line} ({})", refused.rejection.label().to_lowercase()).dimmed()
            ),
        }
    }

    let summary = format!(
        "{} accepted, {} rejected, {} edges in final graph",
        report.accepted().len(),
        report.rejected().len(),
        report.edges().len()
    );
    if report.is_clean() {
        println!("{}", summary.green());
    } else {
        println!("{}", summary.red().bold());
    }
    Ok(())
}

/// Prints the cycles found in each audited file.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_audit(results: &[AuditResult], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&results);
    }

    for result in results {
        let name = result.path.display();
        if result.cycles.is_empty() {
            println!("{} {name} ({} edges, no cycles)", "✓".green(), result.edges);
            continue;
        }
        println!(
            "{} {name}: {} {}",
            "✗".red().bold(),
            result.cycles.len(),
            pluralize("cycle", result.cycles.len())
        );
        for cycle in &result.cycles {
            println!("    {}", cycle.join(" → ").yellow());
        }
    }
    Ok(())
}

/// Prints the directed and undirected rules.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_rules(rules: &RuleSet, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(rules);
    }

    if rules.is_empty() {
        println!("{}", "No blocked routes.".dimmed());
        return Ok(());
    }
    for rule in rules.directed() {
        println!("  {} → {}  {}", rule.from, rule.to, rule.message().dimmed());
    }
    for rule in rules.undirected() {
        println!("  {} ↔ {}", rule.a, rule.b);
    }
    println!(
        "{} directed, {} undirected",
        rules.directed().len(),
        rules.undirected().len()
    );
    Ok(())
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
