//! CLI command handlers.

pub mod args;
pub mod dispatch;
pub mod handlers;
pub mod logging;
pub mod report;

pub use args::{Cli, Commands, OutputFormat};
pub use handlers::Session;
