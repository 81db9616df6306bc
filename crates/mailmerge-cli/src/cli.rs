//! Command-line arguments for `mailmerge`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mailmerge",
    version,
    about = "Generate one personalized document per row of a table",
    long_about = "Generate one personalized document per row of a table.\n\n\
                  Placeholders such as {{name}} in a plain-text template are mapped to\n\
                  table columns, filled in for every record and laid out as PDF or text.\n\
                  {{date}} and {{today}} are always replaced with the current date."
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

    /// Allow record values (names, references) to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate documents from a table and a template.
    Generate(GenerateArgs),

    /// Show the columns and first records of a table.
    Preview(PreviewArgs),

    /// List template placeholders and the columns they map to.
    Fields(FieldsArgs),
}

#[derive(Args)]
pub struct TableArgs {
    /// Delimited table (.csv or .txt) with a header row.
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// Honor quoted fields (embedded commas, quotes and newlines).
    ///
    /// By default each line is split on commas and quote characters are
    /// stripped from every field.
    #[arg(long = "quoted-csv")]
    pub quoted_csv: bool,
}

#[derive(Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: TableArgs,

    /// Plain-text template containing {{placeholders}}.
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Output directory for generated files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "pdf")]
    pub format: OutputFormatArg,

    /// Apply a mapping file: a JSON object of "{{placeholder}}": "Column" pairs.
    #[arg(long = "mapping", value_name = "FILE")]
    pub mapping: Option<PathBuf>,

    /// Map a placeholder to a column, e.g. --map name=Full_Name (repeatable).
    #[arg(long = "map", value_name = "PLACEHOLDER=COLUMN")]
    pub assignments: Vec<String>,

    /// Do not match placeholders to columns by name.
    #[arg(long = "no-auto-map")]
    pub no_auto_map: bool,

    /// Generate only this record (1-based). Failures abort the command.
    #[arg(long = "record", value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub record: Option<u64>,

    /// Also write all documents into one combined file.
    #[arg(long = "combined")]
    pub combined: bool,

    /// Render every document and report names without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Page geometry overrides (TOML).
    #[arg(long = "layout", value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Hide the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

#[derive(Parser)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub input: TableArgs,

    /// Number of records to show.
    #[arg(long = "rows", value_name = "N", default_value_t = 5)]
    pub rows: usize,
}

#[derive(Parser)]
pub struct FieldsArgs {
    #[command(flatten)]
    pub input: TableArgs,

    /// Plain-text template containing {{placeholders}}.
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Pdf,
    Text,
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
