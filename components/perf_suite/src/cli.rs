//! Command-line arguments

use clap::Parser;

/// Micro-benchmark suite for basic language constructs
#[derive(Parser, Debug)]
#[command(name = "perf-test")]
#[command(version)]
#[command(about = "Times loops over basic language constructs", long_about = None)]
pub struct Cli {
    /// Only run benchmarks whose name or label contains this text
    #[arg(short, long, value_name = "PATTERN")]
    pub filter: Option<String>,

    /// List benchmark names and labels without running them
    #[arg(short, long)]
    pub list: bool,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true, value_name = "IGNORED")]
    pub ignored: Vec<String>,
}
