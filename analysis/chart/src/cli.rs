use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

/// Grouped bar chart of median throughput per pattern and dispatch strategy
#[derive(Debug, Clone, Parser)]
#[command(version)]
pub struct Args {
    /// Benchmark results (CSV with pattern, impl and ops_per_sec columns)
    pub results: PathBuf,

    /// Where to write the PNG chart
    pub chart: PathBuf,

    /// Trailing arguments, accepted and ignored
    #[arg(hide = true)]
    pub rest: Vec<String>,

    /// Print a per pattern comparison of the two implementations
    #[arg(long)]
    pub summary: bool,

    /// Log verbosity, logs go to stderr
    #[arg(long, default_value_t = Level::WARN)]
    pub log_level: Level,
}
