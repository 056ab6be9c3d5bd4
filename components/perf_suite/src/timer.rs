//! Benchmark timer and report writer
//!
//! A [`Reporter`] writes the section header when a benchmark starts and the
//! operation/time/throughput lines when it ends. Time comes from a [`Clock`]
//! so the report can be driven by a scripted clock in tests.

use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Source of monotonic timestamps
pub trait Clock {
    /// Time elapsed since an arbitrary, fixed origin
    fn now(&self) -> Duration;
}

/// [`Clock`] backed by [`std::time::Instant`]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock whose origin is the current instant
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Timestamp captured by [`Reporter::start`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartToken {
    at: Duration,
}

/// Outcome of a single timed benchmark
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    /// Label passed when the benchmark ended
    pub label: String,
    /// Logical operations counted by the benchmark body
    pub operations: u64,
    /// Wall-clock seconds spent in the benchmark body
    pub elapsed_secs: f64,
}

impl BenchmarkResult {
    /// Throughput, or `None` when no time was measured
    pub fn ops_per_sec(&self) -> Option<f64> {
        if self.elapsed_secs > 0.0 {
            Some(self.operations as f64 / self.elapsed_secs)
        } else {
            None
        }
    }

    /// Write the operations, time and throughput lines followed by a blank line
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Operations: {}", self.operations)?;
        writeln!(out, "Time: {} sec", format_float(self.elapsed_secs))?;
        if let Some(ops) = self.ops_per_sec() {
            writeln!(out, "Ops/sec: {}", format_float(ops))?;
        }
        writeln!(out)
    }
}

/// Shortest round-trip rendering that always keeps a decimal point or exponent
pub fn format_float(value: f64) -> String {
    let mut buffer = ryu::Buffer::new();
    buffer.format(value).to_owned()
}

/// Writes benchmark reports to `W`, timing them with `C`
pub struct Reporter<W: Write, C: Clock = MonotonicClock> {
    out: W,
    clock: C,
}

impl<W: Write> Reporter<W, MonotonicClock> {
    /// Reporter timed by the system's monotonic clock
    pub fn new(out: W) -> Self {
        Self::with_clock(out, MonotonicClock::new())
    }
}

impl<W: Write, C: Clock> Reporter<W, C> {
    /// Reporter timed by a caller-supplied clock
    pub fn with_clock(out: W, clock: C) -> Self {
        Self { out, clock }
    }

    /// Print the `=== label ===` header and capture the start time
    pub fn start(&mut self, label: &str) -> io::Result<StartToken> {
        writeln!(self.out, "=== {} ===", label)?;
        Ok(StartToken {
            at: self.clock.now(),
        })
    }

    /// Stop timing and print the report block for `operations`
    ///
    /// The throughput line is left out when the measured time is zero.
    pub fn end(
        &mut self,
        token: StartToken,
        label: &str,
        operations: u64,
    ) -> io::Result<BenchmarkResult> {
        let elapsed = self.clock.now().saturating_sub(token.at);
        let result = BenchmarkResult {
            label: label.to_string(),
            operations,
            elapsed_secs: elapsed.as_secs_f64(),
        };

        result.write_report(&mut self.out)?;
        self.out.flush()?;
        Ok(result)
    }

    /// Mutable access to the underlying writer
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consume the reporter, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Clock that replays a fixed list of readings, then repeats the last one
#[cfg(test)]
pub(crate) struct ScriptedClock {
    readings: std::cell::RefCell<std::collections::VecDeque<Duration>>,
    last: std::cell::Cell<Duration>,
}

#[cfg(test)]
impl ScriptedClock {
    pub(crate) fn new(readings: &[Duration]) -> Self {
        Self {
            readings: std::cell::RefCell::new(readings.iter().copied().collect()),
            last: std::cell::Cell::new(Duration::ZERO),
        }
    }

    /// Clock that never advances
    pub(crate) fn frozen() -> Self {
        Self::new(&[])
    }
}

#[cfg(test)]
impl Clock for ScriptedClock {
    fn now(&self) -> Duration {
        if let Some(next) = self.readings.borrow_mut().pop_front() {
            self.last.set(next);
        }
        self.last.get()
    }
}
