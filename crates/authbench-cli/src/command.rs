use authbench_core::ErrorPolicy;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub subcommand: Subcommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Subcommands {
    /// Benchmark every configured target and write the results.
    Run(SubcommandRun),
    /// Recompute the summary of a saved results file.
    Metrics(SubcommandMetrics),
}

#[derive(Args, Debug, Clone)]
pub struct SubcommandRun {
    #[arg(short, long = "config", env = "AUTHBENCH_CONFIG_FILE")]
    pub configfile: Option<PathBuf>,

    #[arg(short, long = "log-filter", env = "AUTHBENCH_LOG_FILTER")]
    pub log_filter: Option<String>,

    #[arg(long = "calls", env = "AUTHBENCH_CALLS")]
    pub calls: Option<usize>,

    #[arg(long = "on-error", env = "AUTHBENCH_ON_ERROR", value_enum)]
    pub on_error: Option<ErrorPolicy>,

    #[arg(short, long = "output-dir", env = "AUTHBENCH_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    #[arg(long = "label", env = "AUTHBENCH_LABEL")]
    pub label: Option<String>,

    /// Only run the named targets.
    #[arg(long = "only", env = "AUTHBENCH_ONLY", value_delimiter = ',', num_args = 1..)]
    pub only: Option<Vec<String>>,
}

#[derive(Args, Debug, Clone)]
pub struct SubcommandMetrics {
    pub file: PathBuf,
}
