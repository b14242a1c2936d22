//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "reorg",
    version,
    about = "Campaign-driven CSV transformation",
    long_about = "Apply a campaign's per-column transformation rules to a CSV file\n\
                  and export the reorganized result under the campaign's column layout."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Transform a CSV file through a campaign and write the export.
    Process(ProcessArgs),

    /// Show a campaign's columns and rules.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Path to the campaign JSON document.
    #[arg(long = "campaign", value_name = "CAMPAIGN_JSON")]
    pub campaign: PathBuf,

    /// Directory for the output file (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Keep the input's source headers instead of projecting to the
    /// campaign's display names.
    #[arg(long = "raw-headers")]
    pub raw_headers: bool,

    /// Run the transformation and report counts without writing output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the campaign JSON document.
    #[arg(long = "campaign", value_name = "CAMPAIGN_JSON")]
    pub campaign: PathBuf,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
