//! Command-line arguments.

use crate::formatter::OutputFormat;
use clap::{Parser, Subcommand};
use modelver_core::DeltaConfig;
use std::path::PathBuf;

/// Default log filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "modelver=info,modelver_core=info";

/// modelver - compare version maps and compute model version deltas
#[derive(Parser, Debug)]
#[command(name = "modelver")]
#[command(version, about = "Compare version maps and compute model version deltas", long_about = None)]
pub struct Args {
    /// Output format
    #[arg(long, global = true, default_value = "table", value_enum)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify how the target versions relate to the current versions.
    Compare(MapArgs),

    /// Compute the per-type delta from the current to the target versions.
    Delta {
        #[command(flatten)]
        maps: MapArgs,

        /// Fail instead of producing a downward delta.
        #[arg(long)]
        no_downward: bool,
    },
}

/// Inputs shared by every subcommand.
#[derive(clap::Args, Debug)]
pub struct MapArgs {
    /// JSON file with the versions currently recorded.
    #[arg(long)]
    pub current: PathBuf,

    /// JSON file with the versions the application targets.
    #[arg(long)]
    pub target: PathBuf,

    /// Type known to be deleted (repeatable).
    #[arg(long = "deleted", value_name = "TYPE")]
    pub deleted_types: Vec<String>,
}

impl Command {
    /// Version map inputs of the subcommand.
    pub fn maps(&self) -> &MapArgs {
        match self {
            Command::Compare(maps) => maps,
            Command::Delta { maps, .. } => maps,
        }
    }

    /// Calculator configuration derived from the flags.
    pub fn delta_config(&self) -> DeltaConfig {
        match self {
            Command::Delta { no_downward, .. } => {
                DeltaConfig::new().with_allow_downward(!no_downward)
            }
            Command::Compare(_) => DeltaConfig::default(),
        }
    }
}
