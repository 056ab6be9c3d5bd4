//! Micro-benchmark suite for basic language constructs
//!
//! This crate times a fixed sequence of small loops (arithmetic, control
//! flow, calls, closures, structs, trait objects, a linked list) and prints
//! the elapsed time and throughput of each. It includes:
//!
//! - A timer/reporter that writes one report block per benchmark
//! - An ordered benchmark registry and runner
//! - The micro-benchmark bodies themselves
//!
//! # Examples
//!
//! ```rust,no_run
//! use perf_suite::micro;
//!
//! let results = micro::run_all(std::io::stdout()).unwrap();
//! for result in results {
//!     println!("{}: {} ops", result.label, result.operations);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod logging;
pub mod micro;
pub mod runner;
pub mod timer;

pub use cli::Cli;
pub use error::{BenchError, BenchResult};
pub use runner::{Benchmark, BenchmarkSuite};
pub use timer::{BenchmarkResult, Clock, MonotonicClock, Reporter};
