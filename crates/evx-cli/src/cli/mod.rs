use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{Commands, QueryArgs, RunArgs, SchemaArgs};

/// Top-level CLI parser for the `evx` binary.
#[derive(Debug, Parser)]
#[command(
    name = "evx",
    version,
    about = "Evidex - evidence document store seed/query demo"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format for command results: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logical database name (overrides config)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Root directory for local database files (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Remote store URL, e.g. libsql://... (overrides config)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Auth token for the remote store (overrides config)
    #[arg(long, global = true)]
    pub auth_token: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            database: self.database.clone(),
            data_dir: self.data_dir.clone(),
            url: self.url.clone(),
            auth_token: self.auth_token.clone(),
        }
    }
}
