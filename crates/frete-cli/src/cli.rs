//! CLI argument definitions for the rate ingestion tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "frete",
    version,
    about = "Frete Studio - Infer schemas of carrier rate tables and quote payloads",
    long_about = "Analyze loosely structured shipping-rate data.\n\n\
                  Ingests delimited rate tables exported by logistics carriers and\n\
                  nested quote payloads from third-party quoting services, inferring\n\
                  which columns and fields carry prices, postal ranges, carriers,\n\
                  and lead times."
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
    /// Ingest a delimited rate table and show the inferred column mapping.
    Table(TableArgs),

    /// Analyze a quote payload and suggest a field mapping.
    Quote(QuoteArgs),

    /// Apply a persisted field mapping to a sample payload.
    Preview(PreviewArgs),
}

#[derive(Parser)]
pub struct TableArgs {
    /// Path to the delimited rate-table file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Decimal convention of the table's numbers.
    #[arg(long = "decimal-separator", value_enum, default_value = "comma")]
    pub decimal_separator: DecimalSeparatorArg,

    /// Maximum normalized rows to display.
    #[arg(long = "limit", value_name = "N", default_value_t = 10)]
    pub limit: usize,

    /// Emit machine-readable JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct QuoteArgs {
    /// Path to the quote payload (JSON).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Maximum preview options to display.
    #[arg(long = "limit", value_name = "N", default_value_t = 10)]
    pub limit: usize,

    /// Emit machine-readable JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Path to the sample payload (JSON).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Path to the persisted field mapping (JSON).
    #[arg(long = "mapping", value_name = "MAPPING")]
    pub mapping: PathBuf,

    /// Rebind a role slot before previewing, e.g. --set price=valor_total.
    ///
    /// Roles: carrier_name, price, lead_time, identifier, error_flag.
    #[arg(long = "set", value_name = "ROLE=KEY")]
    pub set: Vec<String>,

    /// Maximum preview options to display.
    #[arg(long = "limit", value_name = "N", default_value_t = 10)]
    pub limit: usize,

    /// Emit machine-readable JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

/// Decimal-separator choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DecimalSeparatorArg {
    /// Comma decimals, dot thousands ("1.234,56").
    Comma,
    /// Dot decimals ("1234.56").
    Dot,
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
