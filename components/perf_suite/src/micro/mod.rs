//! Micro-benchmarks for fundamental language constructs
//!
//! Each benchmark runs a fixed loop and returns the number of logical
//! operations it counted. Values that are computed and then discarded go
//! through [`std::hint::black_box`] so the work being measured survives
//! optimisation.

use crate::error::BenchResult;
use crate::runner::{write_completion_banner, Benchmark, BenchmarkSuite};
use crate::timer::{BenchmarkResult, Reporter};
use std::io::Write;

pub mod basics;
pub mod control_flow;
pub mod functions;
pub mod objects;

/// Create the micro-benchmark suite in run order
pub fn create_suite() -> BenchmarkSuite {
    let mut suite = BenchmarkSuite::new("Performance Tests".to_string());

    for bench in [
        Benchmark::new("variables", "Variables", basics::variables),
        Benchmark::new("arithmetic", "Arithmetic Operations", basics::arithmetic),
        Benchmark::new("comparison", "Comparison Operations", basics::comparison),
        Benchmark::new("logical", "Logical Operations", basics::logical),
        Benchmark::new("strings", "String Operations", basics::strings),
        Benchmark::new("conditionals", "Conditional Statements", control_flow::conditionals),
        Benchmark::new("nested_conditions", "Nested Conditions", control_flow::nested_conditions),
        Benchmark::new("while_loop", "While Loop", control_flow::while_loop),
        Benchmark::new("for_loop", "For Loop", control_flow::for_loop),
        Benchmark::new("nested_loops", "Nested Loops", control_flow::nested_loops),
        Benchmark::new("function_calls", "Function Calls", functions::function_calls),
        Benchmark::new(
            "multiple_params",
            "Functions with Multiple Parameters",
            functions::multiple_params,
        ),
        Benchmark::new("recursion", "Recursion (fib(25))", functions::recursion),
        Benchmark::new("closures", "Closures", functions::closures),
        Benchmark::new(
            "class_creation",
            "Class Object Creation and Usage",
            objects::class_creation,
        ),
        Benchmark::new("multiple_objects", "Multiple Object Creation", objects::multiple_objects),
        Benchmark::new("inheritance", "Inheritance and Virtual Methods", objects::inheritance),
        Benchmark::new("scope", "Scope and Blocks", control_flow::scope),
        Benchmark::new(
            "complex_expressions",
            "Complex Expressions",
            basics::complex_expressions,
        ),
        Benchmark::new("assignment", "Assignment", basics::assignment),
        Benchmark::new("nil_handling", "Nil Handling", basics::nil_handling),
        Benchmark::new("linked_list", "Linked List (Data Structures)", objects::linked_list)
            .with_result_label("Linked List (1000 elements)"),
        Benchmark::new("class_methods", "Class Methods", objects::class_methods),
        Benchmark::new("nested_classes", "Complex Class Operations", objects::nested_classes),
        Benchmark::new(
            "multiple_variables",
            "Multiple Variable Changes",
            basics::multiple_variables,
        ),
        Benchmark::new("combined", "Combined Test", objects::combined),
    ] {
        suite.add(bench);
    }

    suite
}

/// Run every micro-benchmark against the monotonic clock, then print the banner
pub fn run_all<W: Write>(out: W) -> BenchResult<Vec<BenchmarkResult>> {
    run_suite(&create_suite(), out)
}

/// Run `suite` against the monotonic clock, then print the banner
pub fn run_suite<W: Write>(suite: &BenchmarkSuite, out: W) -> BenchResult<Vec<BenchmarkResult>> {
    let mut reporter = Reporter::new(out);
    let results = suite.run(&mut reporter)?;
    write_completion_banner(reporter.writer_mut())?;
    Ok(results)
}
