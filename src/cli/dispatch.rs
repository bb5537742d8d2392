//! Command dispatch logic extracted from binary to reduce main function size.

use super::{
    args::Commands,
    handlers::{handle_audit, handle_check, handle_replay, handle_rules, Session},
};
use crate::exit::RouteGuardExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(session: &Session, command: Commands) -> Result<RouteGuardExit> {
    match command {
        Commands::Check {
            source,
            target,
            graph,
            rules,
            format,
        } => handle_check(
            session,
            &source,
            &target,
            graph.as_deref(),
            rules.as_deref(),
            format,
        ),
        Commands::Replay {
            file,
            onto,
            rules,
            format,
        } => handle_replay(session, &file, onto.as_deref(), rules.as_deref(), format),
        Commands::Audit { files, format } => handle_audit(session, &files, format),
        Commands::Rules { rules, format } => handle_rules(session, rules.as_deref(), format),
    }
}
