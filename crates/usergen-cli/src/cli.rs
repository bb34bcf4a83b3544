//! CLI argument definitions for the username candidate generator.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "usergen",
    version,
    about = "Generate username candidates from a table of full names",
    long_about = "Generate login username candidates from people's full names.\n\n\
                  Reads a workbook or CSV/TSV export, picks the name column, and writes every\n\
                  candidate (parts, pairs, ordered triples, initials) one per line.",
    after_help = "Examples:\n  \
                  usergen generate -t employees.csv\n  \
                  usergen generate -t employees.xlsx -o /tmp/usernames.list\n  \
                  usergen generate -t employees.csv -c \"Full Name\" -v\n  \
                  usergen preview \"Dilanka Kaushal Hewage\""
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for per-name progress, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module (target) in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Allow input names to appear in debug logs (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Read a table of names and write the candidate list.
    Generate(GenerateArgs),

    /// Print the candidates for names given on the command line.
    Preview(PreviewArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Input table (.xlsx, .xls, .ods, .csv, .tsv, or delimited .txt).
    #[arg(short = 't', long = "target", value_name = "FILE")]
    pub target: PathBuf,

    /// Output file (default: usernames.list in the current directory).
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Column containing the names (auto-detected if not given).
    #[arg(short = 'c', long = "column", value_name = "NAME", conflicts_with = "headers")]
    pub column: Option<String>,

    /// Header names to auto-detect, replacing the built-in list (repeatable).
    #[arg(long = "header", value_name = "NAME")]
    pub headers: Vec<String>,

    /// Extra cell values to skip besides blanks, "nan" and "none" (repeatable).
    #[arg(long = "placeholder", value_name = "TOKEN")]
    pub placeholders: Vec<String>,

    /// Worker threads for generation (default: available parallelism).
    #[arg(short = 'j', long = "jobs", value_name = "N")]
    pub jobs: Option<NonZeroUsize>,

    /// Generate and summarise without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Full names to expand.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
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
