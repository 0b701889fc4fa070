//! CLI argument definitions for the GEDCOM checker.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use ged_validate::RuleId;

#[derive(Parser)]
#[command(
    name = "gedcheck",
    version,
    about = "GEDCOM checker - parse a family tree and report inconsistencies",
    long_about = "Parse a GEDCOM genealogy file, list its individuals and families,\n\
                  and check them against the US01-US26 consistency rules."
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
    /// Parse a GEDCOM file and report rule findings.
    Check(CheckArgs),

    /// Echo every line of a GEDCOM file with its classification.
    Lines(LinesArgs),

    /// List the rule catalog.
    Rules,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// GEDCOM file to check.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Reference date for future-date checks (default: today).
    #[arg(long = "as-of", value_name = "YYYY-MM-DD")]
    pub as_of: Option<NaiveDate>,

    /// Run only this rule (repeatable, e.g. --rule US04 --rule US05).
    #[arg(long = "rule", value_name = "ID")]
    pub rules: Vec<RuleId>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Write the report to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Skip the individual and family listings.
    #[arg(long = "no-listing")]
    pub no_listing: bool,

    /// Exit with status 2 when any finding is reported.
    #[arg(long = "deny-findings")]
    pub deny_findings: bool,
}

#[derive(Parser)]
pub struct LinesArgs {
    /// GEDCOM file to trace.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
