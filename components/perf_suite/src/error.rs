//! Error types for the benchmark harness

use thiserror::Error;

/// Errors surfaced by the harness itself.
///
/// Benchmark bodies never fail on their own; a panic inside one is left to
/// abort the run.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Writing the report failed
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// A `--filter` pattern selected no benchmarks
    #[error("no benchmark matches '{0}'")]
    NoMatch(String),
}

/// Result type for harness operations
pub type BenchResult<T> = Result<T, BenchError>;
