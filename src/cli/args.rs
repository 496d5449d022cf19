//! CLI argument definitions and `Invocation` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};

use super::{resolve_catalog_path, CatalogProfile};
use crate::engine::ToolId;

/// Top-level commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// List catalog servers with their supported tools.
    Servers,
    /// Show selectable tools and shell types for a server (and tool).
    Options(OptionsArgs),
    /// Apply a JSON event script to a fresh session and print the result.
    #[command(
        long_about = concat!(
            "Apply a JSON array of selection events to a fresh session.\n\n",
            "Each event looks like {\"event\": \"server\", \"value\": \"Tomcat\"}."
        ),
        after_help = "Hint: add --finalize to print the request handed to the generation backend."
    )]
    Replay(ReplayArgs),
}

/// Arguments for `options`.
#[derive(Debug, Clone, Args)]
pub struct OptionsArgs {
    /// Target server name as listed in the catalog.
    #[arg(long)]
    pub server: String,
    /// Tool to select after the server (defaults to the first listed tool).
    #[arg(long)]
    pub tool: Option<ToolId>,
}

/// Arguments for `replay`.
#[derive(Debug, Clone, Args)]
pub struct ReplayArgs {
    /// Path to a JSON array of selection events.
    pub events: PathBuf,
    /// Print the finalised generation request instead of the record.
    #[arg(long, default_value_t = false)]
    pub finalize: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Serialization used for command output.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Toml,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Reconcile memory-shell generation settings against a compatibility catalog",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a catalog file (overrides MEMSHELL_CATALOG_PATH).
    #[arg(long = "catalog", global = true)]
    pub catalog_override: Option<PathBuf>,
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Parsed command with its resolved catalog source.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub catalog: CatalogProfile,
    pub command: CliCommand,
}

impl CliArgs {
    /// Resolve the catalog source and keep the command.
    pub fn into_invocation(self) -> Result<Invocation> {
        let catalog = resolve_catalog_path(self.catalog_override)?;
        Ok(Invocation {
            catalog,
            command: self.command,
        })
    }
}
