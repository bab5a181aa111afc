//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::time::Duration;

use crate::report::ReportFormat;

/// tpudiepie - Monitor and manage Cloud TPU nodes.
#[derive(Debug, Parser)]
#[command(name = "tpudiepie")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides ~/.tpudiepie/config.yml)
    #[arg(short, long, global = true, env = "TPUDIEPIE_CONFIG")]
    pub config: Option<PathBuf>,

    /// GCP project passed to gcloud
    #[arg(long, global = true, env = "TPUDIEPIE_PROJECT")]
    pub project: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List TPU nodes and their status
    List(ListArgs),

    /// Watch TPU status, refreshing periodically
    Top(WatchArgs),

    /// Watch TPU status (same as top)
    Tail(WatchArgs),

    /// Delete a TPU node
    Delete(DeleteArgs),

    /// Reimage a TPU node in place and wait until it is healthy
    Reimage(ReimageArgs),

    /// Delete and re-create a TPU node, then wait until it is healthy
    Recreate(RecreateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Only list nodes in this zone
    #[arg(long, env = "TPUDIEPIE_ZONE")]
    pub zone: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for `top` and `tail`.
#[derive(Debug, Clone, Default, Args)]
pub struct WatchArgs {
    /// Only watch nodes in this zone
    #[arg(long, env = "TPUDIEPIE_ZONE")]
    pub zone: Option<String>,

    /// Seconds between refreshes (overrides config)
    #[arg(long, value_name = "SECS", value_parser = parse_interval)]
    pub interval: Option<Duration>,
}

/// Options shared by every lifecycle command.
#[derive(Debug, Clone, Default, Args)]
pub struct TargetArgs {
    /// TPU node id
    pub tpu: String,

    /// Zone of the node (searched across all configured zones if omitted)
    #[arg(long, env = "TPUDIEPIE_ZONE")]
    pub zone: Option<String>,

    /// Runtime version to use instead of the node's current one
    #[arg(long = "version", value_name = "VERSION")]
    pub tpu_version: Option<String>,

    /// Skip the plan and confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Print the steps without running them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `delete` command.
#[derive(Debug, Clone, Default, Args)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

/// Arguments for the `reimage` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ReimageArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Give up waiting for HEALTHY after this many seconds
    #[arg(long, value_name = "SECS", value_parser = parse_timeout)]
    pub wait_timeout: Option<Duration>,
}

/// Arguments for the `recreate` command.
#[derive(Debug, Clone, Default, Args)]
pub struct RecreateArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Only recreate if the node is currently PREEMPTED
    #[arg(short, long)]
    pub preempted: bool,

    /// Give up waiting for HEALTHY after this many seconds
    #[arg(long, value_name = "SECS", value_parser = parse_timeout)]
    pub wait_timeout: Option<Duration>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// A positive number of seconds.
fn parse_interval(value: &str) -> Result<Duration, String> {
    let secs = parse_secs(value)?;
    if secs == 0.0 {
        return Err("must be greater than zero".to_string());
    }
    Ok(Duration::from_secs_f64(secs))
}

/// Zero or more seconds.
fn parse_timeout(value: &str) -> Result<Duration, String> {
    parse_secs(value).map(Duration::from_secs_f64)
}

fn parse_secs(value: &str) -> Result<f64, String> {
    let secs: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number of seconds"))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(format!("'{value}' is not a valid number of seconds"));
    }
    Ok(secs)
}
