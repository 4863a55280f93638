//! CLI argument definitions for the plant log parser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "plantlog",
    version,
    about = "Plant Log Parser - Map messy operational sheets to canonical measurements",
    long_about = "Parse operational plant spreadsheets with unpredictable layouts.\n\n\
                  Detects the header row, maps column headers to canonical\n\
                  parameters and assets, normalizes cell values and reports\n\
                  physical-range warnings."
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

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

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
    /// Parse a CSV sheet and emit the structured report as JSON.
    Parse(ParseArgs),

    /// List the built-in parameter and asset catalogs.
    Registry(RegistryArgs),
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Path to the CSV file to parse.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Sheet name recorded in the report metadata (default: file stem).
    #[arg(long = "sheet-name", value_name = "NAME")]
    pub sheet_name: Option<String>,

    /// Write the JSON report to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print a human-readable summary table after parsing.
    #[arg(long = "summary")]
    pub summary: bool,
}

#[derive(Parser)]
pub struct RegistryArgs {
    /// Which catalog to list.
    #[arg(value_enum, default_value = "parameters")]
    pub catalog: CatalogArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CatalogArg {
    Parameters,
    Assets,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
