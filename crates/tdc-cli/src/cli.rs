use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tdc_report::ReportFormat;

#[derive(Parser)]
#[command(
    name = "translation-diff-checker",
    about = "Compare translation files and report missing, removed, new and changed keys",
    version,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub compare: CompareArgs,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML file with [report] and [scan] settings
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
    Text,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Html => ReportFormat::Html,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Text => ReportFormat::Text,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum DirsFormat {
    Text,
    Html,
}

#[derive(Subcommand)]
pub enum Command {
    /// Top-level gap analysis of two files as HTML
    Analyze(AnalyzeArgs),
    /// Compare every translation file in two directories
    Dirs(DirsArgs),
    /// Find translation folders and files in a repository
    Scan(ScanArgs),
}

/// Comparison of two files, the default mode.
#[derive(Args)]
pub struct CompareArgs {
    /// Source language file (e.g. en.json)
    #[arg(required = true)]
    pub source_file: Option<PathBuf>,
    /// Target language file (e.g. tr.json)
    #[arg(required = true)]
    pub target_file: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "html")]
    pub format: OutputFormat,
    /// Report path; defaults to translation_comparison_report.<ext>
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    pub source_file: PathBuf,
    pub target_file: PathBuf,
    #[arg(short, long, default_value = "translation_gap_analysis.html")]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct DirsArgs {
    pub source_dir: PathBuf,
    /// Defaults to SOURCE_DIR
    pub target_dir: Option<PathBuf>,
    /// File name glob; defaults to the configured scan pattern
    #[arg(long)]
    pub pattern: Option<String>,
    #[arg(long, value_enum, default_value = "text")]
    pub format: DirsFormat,
    /// Report path; defaults to multi_file_report.<ext>
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ScanArgs {
    pub repo: PathBuf,
    /// Language code whose reference file to pick (e.g. en)
    #[arg(long)]
    pub reference: Option<String>,
}
