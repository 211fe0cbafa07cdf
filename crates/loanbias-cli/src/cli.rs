//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use loanbias_model::DEFAULT_GROUP_STRENGTH;

#[derive(Parser)]
#[command(
    name = "loanbias",
    version,
    about = "Demonstrate algorithmic gender bias in loan approval decisions",
    long_about = "Ingest loan applicant records, derive a deliberately biased copy of the \
                  dataset, and compare approval-rate, income and credit score disparities \
                  between the original and biased data."
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

    /// Allow applicant field values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Inject bias into an applicant CSV and report disparities.
    Analyze(AnalyzeArgs),

    /// Write the biased copy of an applicant CSV without analysis.
    Inject(InjectArgs),

    /// Decide a single loan application.
    Decide(DecideArgs),
}

/// Options shared by commands that read applicant data.
#[derive(Args)]
pub struct AnalysisArgs {
    /// TOML file with analysis options (thresholds, approval rule, gender mode).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Reject gender labels other than Male and Female.
    #[arg(long = "strict-gender")]
    pub strict_gender: bool,

    /// Approval-rate gap (fraction) above which gender bias is flagged.
    #[arg(long = "approval-threshold", value_name = "FRACTION")]
    pub approval_threshold: Option<f64>,

    /// Average income gap above which income bias is flagged.
    #[arg(long = "income-threshold", value_name = "AMOUNT")]
    pub income_threshold: Option<f64>,

    /// Average credit score gap above which credit score bias is flagged.
    #[arg(long = "credit-threshold", value_name = "POINTS")]
    pub credit_threshold: Option<f64>,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Applicant CSV; the header must list age, gender, occupation,
    /// education_level, marital_status, income and credit_score in order.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory for the exported biased dataset (default: <INPUT dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip writing the biased dataset.
    #[arg(long = "no-export")]
    pub no_export: bool,

    /// Also write the full report payload as JSON.
    #[arg(long = "json", value_name = "FILE")]
    pub json: Option<PathBuf>,

    #[command(flatten)]
    pub analysis: AnalysisArgs,
}

#[derive(Parser)]
pub struct InjectArgs {
    /// Applicant CSV to read.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the biased CSV.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: PathBuf,

    /// Reject gender labels other than Male and Female.
    #[arg(long = "strict-gender")]
    pub strict_gender: bool,

    /// Also scale this column up for male and down for female records.
    #[arg(long = "group-target", value_enum, value_name = "COLUMN")]
    pub group_target: Option<ColumnArg>,

    /// Group bias strength between 0 and 1.
    #[arg(
        long = "group-strength",
        value_name = "FRACTION",
        default_value_t = DEFAULT_GROUP_STRENGTH
    )]
    pub group_strength: f64,

    /// Keep only records on one side of a threshold in this column.
    #[arg(
        long = "selection-column",
        value_enum,
        value_name = "COLUMN",
        requires = "selection_threshold"
    )]
    pub selection_column: Option<ColumnArg>,

    /// Threshold for selection bias (records equal to it are dropped).
    #[arg(
        long = "selection-threshold",
        value_name = "VALUE",
        requires = "selection_column"
    )]
    pub selection_threshold: Option<f64>,

    /// Side of the threshold to keep.
    #[arg(long = "selection-direction", value_enum, default_value = "above")]
    pub selection_direction: DirectionArg,
}

#[derive(Parser)]
pub struct DecideArgs {
    /// Annual income.
    #[arg(long = "income")]
    pub income: f64,

    /// Credit score.
    #[arg(long = "credit-score")]
    pub credit_score: i32,

    /// TOML file with a custom approval rule.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Numeric applicant columns.
#[derive(Clone, Copy, ValueEnum)]
pub enum ColumnArg {
    Age,
    Income,
    #[value(name = "credit_score", alias = "credit-score")]
    CreditScore,
}

/// Selection bias direction.
#[derive(Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    Above,
    Below,
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
