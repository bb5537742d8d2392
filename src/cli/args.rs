use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "routeguard",
    version,
    about = "Validate connections in a directed country route graph"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Enable debug logging (overridden by `RUST_LOG`)
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Directory containing `routeguard.toml`
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    pub config_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decide whether SOURCE → TARGET may be added to a graph
    Check {
        source: String,
        target: String,
        /// Current graph snapshot (editor JSON export); empty graph if omitted
        #[arg(long, value_name = "FILE")]
        graph: Option<PathBuf>,
        /// Rule document, overriding the configured one
        #[arg(long, value_name = "FILE")]
        rules: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Validate every edge of a graph file in order, as if drawn one by one
    Replay {
        file: PathBuf,
        /// Snapshot the replayed edges are added onto
        #[arg(long, value_name = "FILE")]
        onto: Option<PathBuf>,
        #[arg(long, value_name = "FILE")]
        rules: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Report cycles already present in graph files
    Audit {
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the loaded blocked-route rules
    Rules {
        #[arg(long, value_name = "FILE")]
        rules: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}
