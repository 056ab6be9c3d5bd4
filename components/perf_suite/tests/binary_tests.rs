//! End-to-end tests that run the `perf-test` binary

use regex::Regex;
use std::process::{Command, Output};

fn perf_test(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_perf-test"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch perf-test")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

/// Labels and operation counts, ignoring timings
fn skeleton(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| line.starts_with("=== ") || line.starts_with("Operations: "))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_full_run_succeeds() {
    let output = perf_test(&[]);
    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));

    let text = stdout_of(&output);
    let headers = text
        .lines()
        .filter(|line| line.starts_with("=== ") && line.ends_with(" ===") && !line.contains("Completed"))
        .count();
    assert_eq!(headers, 26);
    assert!(text.contains("=== All Performance Tests Completed! ==="));
    assert!(text.trim_end().ends_with("in seconds between start and end of each test."));
}

#[test]
fn test_block_shape() {
    let output = perf_test(&[]);
    let text = stdout_of(&output);

    let block = Regex::new(
        r"(?m)^=== (?P<label>[^\n]+) ===\nOperations: (?P<ops>\d+)\nTime: (?P<time>[0-9.e+-]+) sec\n(?:Ops/sec: (?P<rate>[0-9.e+-]+)\n)?\n",
    )
    .unwrap();

    let mut blocks = 0;
    for caps in block.captures_iter(&text) {
        blocks += 1;
        let ops: f64 = caps["ops"].parse().unwrap();
        let time: f64 = caps["time"].parse().unwrap();
        assert!(time >= 0.0);

        match caps.name("rate") {
            Some(rate) => {
                assert!(time > 0.0, "Ops/sec printed for zero time in {}", &caps["label"]);
                let rate: f64 = rate.as_str().parse().unwrap();
                let expected = ops / time;
                assert!((rate - expected).abs() <= expected * 1e-9);
            }
            None => assert_eq!(time, 0.0),
        }
    }
    assert_eq!(blocks, 26);
}

#[test]
fn test_runs_are_structurally_identical() {
    let first = stdout_of(&perf_test(&[]));
    let second = stdout_of(&perf_test(&[]));
    assert_eq!(skeleton(&first), skeleton(&second));
}

#[test]
fn test_filter_runs_subset() {
    let output = perf_test(&["--filter", "recursion"]);
    assert!(output.status.success());

    let text = stdout_of(&output);
    assert!(text.starts_with("=== Recursion (fib(25)) ===\nOperations: 196418\n"));
    assert!(text.contains("=== All Performance Tests Completed! ==="));
    assert!(!text.contains("=== Variables ==="));
}

#[test]
fn test_filter_without_match_fails() {
    let output = perf_test(&["--filter", "no-such-benchmark"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: no benchmark matches 'no-such-benchmark'"));
    assert!(!stderr.contains("NoMatch"));
}

#[test]
fn test_extra_arguments_are_ignored() {
    let output = perf_test(&["extra"]);
    assert!(output.status.success());

    let text = stdout_of(&output);
    assert!(text.starts_with("=== Variables ===\n"));
    assert!(text.contains("=== All Performance Tests Completed! ==="));
}

#[test]
fn test_list_does_not_run() {
    let output = perf_test(&["--list"]);
    assert!(output.status.success());

    let text = stdout_of(&output);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 26);
    assert_eq!(lines[0], "variables\tVariables");
    assert_eq!(lines[25], "combined\tCombined Test");
    assert!(!text.contains("Operations:"));
}
