//! CLI argument definitions for paxname.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

/// Default location of the airline reference document.
pub const DEFAULT_REFERENCE: &str = "docs/airline-name-rules.md";

#[derive(Parser)]
#[command(
    name = "paxname",
    version,
    about = "Format traveler names for airline booking forms",
    long_about = "Format traveler names into the first/middle/last layout each airline expects.\n\n\
                  Verifies the airline rules against known cases and checks that the\n\
                  reference document's links still show the quoted rules."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Allow traveler names to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Format one traveler name for an airline.
    Normalize(NormalizeArgs),

    /// List supported airlines and their name-field rules.
    Airlines(AirlinesArgs),

    /// Run the known airline cases; exits non-zero on any mismatch.
    Verify(VerifyArgs),

    /// Check that reference document URLs are live (advisory only).
    CheckUrls(ReferenceArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Airline key (see `paxname airlines`).
    #[arg(long = "airline", short = 'a', value_name = "KEY")]
    pub airline: String,

    /// Given name(s).
    #[arg(long = "given", default_value = "")]
    pub given: String,

    /// Patronymic marker such as BIN or BINTI.
    #[arg(long = "patronymic", default_value = "")]
    pub patronymic: String,

    /// Surname.
    #[arg(long = "surname", default_value = "")]
    pub surname: String,

    /// Print the fields as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct AirlinesArgs {
    /// Print the policy table as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct VerifyArgs {
    /// Additional cases to run (JSON array of cases).
    #[arg(long = "cases", value_name = "PATH")]
    pub cases: Vec<PathBuf>,

    /// Skip the built-in airline cases.
    #[arg(long = "no-builtin")]
    pub no_builtin: bool,

    /// Also check the reference document URLs. Failures are warnings only.
    #[arg(long = "check-urls")]
    pub check_urls: bool,

    #[command(flatten)]
    pub reference: ReferenceArgs,
}

#[derive(Parser)]
pub struct ReferenceArgs {
    /// Reference document to scan for URLs.
    #[arg(long = "reference", value_name = "PATH", default_value = DEFAULT_REFERENCE)]
    pub reference: PathBuf,

    /// Per-request timeout in seconds.
    #[arg(long = "timeout", value_name = "SECS", default_value_t = 10)]
    pub timeout: u64,

    /// User agent sent with reference requests.
    #[arg(long = "user-agent", value_name = "UA")]
    pub user_agent: Option<String>,
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
