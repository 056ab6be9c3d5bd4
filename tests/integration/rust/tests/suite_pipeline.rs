//! Suite pipeline integration tests
//!
//! Registry -> Runner -> Reporter -> output, checked for ordering, counts
//! and the conditional throughput line.

use integration_tests::SteppingClock;
use perf_suite::runner::write_completion_banner;
use perf_suite::{micro, BenchError, Reporter};
use regex::Regex;
use std::time::Duration;

/// Run the whole suite against `clock` and return the printed text
fn run_with_clock(clock: SteppingClock) -> String {
    let suite = micro::create_suite();
    let mut reporter = Reporter::with_clock(Vec::new(), clock);
    suite.run(&mut reporter).expect("suite run failed");
    write_completion_banner(reporter.writer_mut()).expect("banner failed");
    String::from_utf8(reporter.into_inner()).expect("output is not UTF-8")
}

#[test]
fn test_blocks_follow_declaration_order() {
    let text = run_with_clock(SteppingClock::new(Duration::from_millis(1)));
    let suite = micro::create_suite();

    let headers: Vec<&str> = text
        .lines()
        .filter(|line| line.starts_with("=== ") && !line.contains("Completed"))
        .collect();
    let expected: Vec<String> = suite
        .benchmarks
        .iter()
        .map(|b| format!("=== {} ===", b.label))
        .collect();

    assert_eq!(headers, expected);
}

#[test]
fn test_every_block_is_complete_before_the_next() {
    let text = run_with_clock(SteppingClock::new(Duration::from_millis(2)));
    let lines: Vec<&str> = text.lines().collect();

    // Header, operations, time, throughput, blank.
    for (index, chunk) in lines[..26 * 5].chunks(5).enumerate() {
        assert!(chunk[0].starts_with("=== "), "block {index}: {:?}", chunk);
        assert!(chunk[1].starts_with("Operations: "));
        assert_eq!(chunk[2], "Time: 0.002 sec");
        assert!(chunk[3].starts_with("Ops/sec: "));
        assert_eq!(chunk[4], "");
    }

    assert_eq!(
        &lines[26 * 5..],
        &[
            "========================================",
            "=== All Performance Tests Completed! ===",
            "========================================",
            "",
            "Summary:",
            "The std::time::Instant clock is used to measure time",
            "in seconds between start and end of each test.",
        ]
    );
}

#[test]
fn test_zero_elapsed_drops_every_throughput_line() {
    let text = run_with_clock(SteppingClock::new(Duration::ZERO));

    assert!(!text.contains("Ops/sec"));
    assert_eq!(text.matches("Time: 0.0 sec\n\n").count(), 26);
}

#[test]
fn test_throughput_matches_count_over_time() {
    let text = run_with_clock(SteppingClock::new(Duration::from_millis(4)));
    let block = Regex::new(r"Operations: (\d+)\nTime: ([^ ]+) sec\nOps/sec: ([^\n]+)\n").unwrap();

    let mut seen = 0;
    for caps in block.captures_iter(&text) {
        let ops: f64 = caps[1].parse().unwrap();
        let time: f64 = caps[2].parse().unwrap();
        let rate: f64 = caps[3].parse().unwrap();
        assert!((rate - ops / time).abs() <= 1e-9 * rate);
        seen += 1;
    }
    assert_eq!(seen, 26);
    assert!(text.contains("Operations: 196418\nTime: 0.004 sec\nOps/sec: "));
}

#[test]
fn test_repeated_runs_report_same_counts() {
    let first = micro::run_all(Vec::new()).unwrap();
    let second = micro::run_all(Vec::new()).unwrap();

    let counts = |results: &[perf_suite::BenchmarkResult]| {
        results
            .iter()
            .map(|r| (r.label.clone(), r.operations))
            .collect::<Vec<_>>()
    };
    assert_eq!(counts(&first), counts(&second));
}

#[test]
fn test_linked_list_result_label() {
    let results = micro::run_all(Vec::new()).unwrap();
    let linked = results
        .iter()
        .find(|r| r.label == "Linked List (1000 elements)")
        .expect("linked list result missing");
    assert_eq!(linked.operations, 1999);
}

#[test]
fn test_filter_through_public_api() {
    let suite = micro::create_suite();

    let classes = suite.filtered("class").unwrap();
    let names: Vec<_> = classes.benchmarks.iter().map(|b| b.name).collect();
    assert_eq!(
        names,
        vec!["class_creation", "class_methods", "nested_classes"]
    );

    assert!(matches!(suite.filtered("xyz"), Err(BenchError::NoMatch(_))));
}
