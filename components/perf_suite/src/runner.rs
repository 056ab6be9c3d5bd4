//! Benchmark registry and runner
//!
//! A [`BenchmarkSuite`] is an ordered list of [`Benchmark`]s. Running it
//! invokes every benchmark in declaration order, each one timed and reported
//! through the same [`Reporter`].

use crate::error::{BenchError, BenchResult};
use crate::timer::{BenchmarkResult, Clock, Reporter};
use std::io::{self, Write};
use tracing::{debug, info};

/// Body of a benchmark; returns the number of operations it counted
pub type Workload = fn() -> u64;

/// A single named benchmark
#[derive(Debug, Clone, Copy)]
pub struct Benchmark {
    /// Stable identifier, used for filtering
    pub name: &'static str,
    /// Label printed in the section header
    pub label: &'static str,
    /// Label attached to the result when the benchmark ends
    pub result_label: &'static str,
    /// The timed work
    pub workload: Workload,
}

impl Benchmark {
    /// Benchmark whose result carries the same label as its header
    pub const fn new(name: &'static str, label: &'static str, workload: Workload) -> Self {
        Self {
            name,
            label,
            result_label: label,
            workload,
        }
    }

    /// Attach a different label to the result
    pub const fn with_result_label(mut self, result_label: &'static str) -> Self {
        self.result_label = result_label;
        self
    }

    /// Run this benchmark, timing only the workload call
    pub fn run<W: Write, C: Clock>(
        &self,
        reporter: &mut Reporter<W, C>,
    ) -> io::Result<BenchmarkResult> {
        let token = reporter.start(self.label)?;
        let operations = (self.workload)();
        let result = reporter.end(token, self.result_label, operations)?;

        debug!(
            benchmark = self.name,
            operations = result.operations,
            elapsed_secs = result.elapsed_secs,
            "benchmark finished"
        );
        Ok(result)
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.label.to_lowercase().contains(needle)
    }
}

/// Ordered suite of benchmarks
pub struct BenchmarkSuite {
    /// Name of the suite
    pub name: String,
    /// Benchmarks in this suite, in run order
    pub benchmarks: Vec<Benchmark>,
}

impl BenchmarkSuite {
    /// Create a new, empty benchmark suite
    pub fn new(name: String) -> Self {
        Self {
            name,
            benchmarks: Vec::new(),
        }
    }

    /// Append a benchmark to this suite
    pub fn add(&mut self, benchmark: Benchmark) {
        self.benchmarks.push(benchmark);
    }

    /// Number of benchmarks in the suite
    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    /// True if the suite holds no benchmarks
    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }

    /// Sub-suite of the benchmarks whose name or label contains `pattern`
    ///
    /// Matching ignores case and keeps the original order. An empty result
    /// is an error.
    pub fn filtered(&self, pattern: &str) -> BenchResult<BenchmarkSuite> {
        let needle = pattern.to_lowercase();
        let benchmarks: Vec<Benchmark> = self
            .benchmarks
            .iter()
            .filter(|b| b.matches(&needle))
            .copied()
            .collect();

        if benchmarks.is_empty() {
            return Err(BenchError::NoMatch(pattern.to_string()));
        }

        Ok(BenchmarkSuite {
            name: self.name.clone(),
            benchmarks,
        })
    }

    /// Run every benchmark in order
    ///
    /// There is no isolation between benchmarks: a write failure stops the
    /// run, and a panicking workload unwinds through here.
    pub fn run<W: Write, C: Clock>(
        &self,
        reporter: &mut Reporter<W, C>,
    ) -> BenchResult<Vec<BenchmarkResult>> {
        info!(suite = %self.name, benchmarks = self.len(), "running suite");

        let mut results = Vec::with_capacity(self.len());
        for bench in &self.benchmarks {
            results.push(bench.run(reporter)?);
        }

        info!(suite = %self.name, "suite finished");
        Ok(results)
    }

    /// Write one `name<TAB>label` line per benchmark
    pub fn write_listing<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for bench in &self.benchmarks {
            writeln!(out, "{}\t{}", bench.name, bench.label)?;
        }
        Ok(())
    }
}

/// Write the closing banner and the timing summary
pub fn write_completion_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "========================================")?;
    writeln!(out, "=== All Performance Tests Completed! ===")?;
    writeln!(out, "========================================")?;
    writeln!(out)?;
    writeln!(out, "Summary:")?;
    writeln!(out, "The std::time::Instant clock is used to measure time")?;
    writeln!(out, "in seconds between start and end of each test.")?;
    out.flush()
}
