// NOTE: Command Organization Rationale
//
// Why namespaced subcommands (not flat)?
// - `record list` / `record export` group the collection views, while
//   `add`, `stats`, `employees`, `products` stay top-level because they
//   are the everyday verbs
// - Keeps --help discoverable as the command set grows

mod commands;

pub use commands::*;

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "shiftlog")]
#[command(about = "Record work sessions and analyze per-employee durations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to the system data dir, or SHIFTLOG_PATH)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Output format for views
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Plain,
    /// Machine-readable JSON
    Json,
    /// Comma-separated values (record views only)
    Csv,
}
