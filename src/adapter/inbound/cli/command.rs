//! Command-line interface definitions.
//!
//! Defines the CLI structure for the surebet application using `clap`.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use super::paths;

/// Sports betting arbitrage scanner
#[derive(Parser, Debug)]
#[command(name = "surebet")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the surebet CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan odds snapshots once and report arbitrage opportunities
    Scan(ScanArgs),

    /// Re-scan a snapshot on an interval until interrupted
    Watch(WatchArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `surebet config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Per-invocation overrides shared by `scan` and `watch`.
#[derive(Parser, Debug, Clone, Default)]
pub struct ScanOverrides {
    /// Path to the configuration file (defaults apply if it does not exist).
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Total stake to split across each opportunity.
    #[arg(long)]
    pub stake: Option<Decimal>,

    /// Minimum profit margin in percent.
    #[arg(long)]
    pub min_margin: Option<Decimal>,

    /// Only scan events of this sport (repeatable).
    #[arg(long = "sport", value_name = "SPORT")]
    pub sports: Vec<String>,
}

/// Arguments for the `scan` subcommand.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Snapshot files (JSON arrays of events).
    #[arg(required = true)]
    pub snapshots: Vec<PathBuf>,

    #[command(flatten)]
    pub overrides: ScanOverrides,

    /// Also write the opportunities to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Arguments for the `watch` subcommand.
#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Snapshot file re-read on every cycle.
    pub snapshot: PathBuf,

    #[command(flatten)]
    pub overrides: ScanOverrides,

    /// Seconds between scans.
    #[arg(long)]
    pub interval: Option<u64>,

    /// Stop after this many cycles.
    #[arg(long, hide = true)]
    pub cycles: Option<u64>,
}
