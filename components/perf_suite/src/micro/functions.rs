//! Calls, recursion and closures

use std::hint::black_box;

/// Operation count reported by [`recursion`]; not derived from the call count
pub const FIB_OPERATIONS: u64 = 196418;

fn simple_func(x: i64) -> i64 {
    x + 1
}

fn add(a: i64, b: i64, c: i64) -> i64 {
    a + b + c
}

pub(crate) fn fib(n: i64) -> i64 {
    if n <= 1 {
        return n;
    }
    fib(n - 1) + fib(n - 2)
}

pub(crate) fn make_adder(x: i64) -> impl Fn(i64) -> i64 {
    move |y| x + y
}

/// Single-argument function call
pub fn function_calls() -> u64 {
    let mut count = 0;
    for i in 0..10000_i64 {
        let result = black_box(simple_func)(i);
        black_box(result);
        count += 1;
    }
    count
}

/// Three-argument function call
pub fn multiple_params() -> u64 {
    let mut count = 0;
    for i in 0..10000_i64 {
        let result = black_box(add)(i, i + 1, i + 2);
        black_box(result);
        count += 1;
    }
    count
}

/// Naive recursive `fib(25)`
pub fn recursion() -> u64 {
    let fib_result = fib(black_box(25));
    black_box(fib_result);
    FIB_OPERATIONS
}

/// Calling a closure that captured a value
pub fn closures() -> u64 {
    let mut count = 0;
    let add10 = make_adder(10);
    for i in 0..10000_i64 {
        let result = black_box(&add10)(i);
        black_box(result);
        count += 1;
    }
    count
}
