//! Branches, loops and block scopes

use std::hint::black_box;

/// One two-way branch per iteration
#[allow(clippy::if_same_then_else)]
pub fn conditionals() -> u64 {
    let mut count = 0;
    for i in 0..10000_i64 {
        if i < 5000 {
            count += 1;
        } else {
            count += 1;
        }
    }
    count
}

/// Branches nested two deep
#[allow(clippy::if_same_then_else)]
pub fn nested_conditions() -> u64 {
    let mut count = 0;
    for i in 0..10000_i64 {
        if i < 3333 {
            if i < 1666 {
                count += 1;
            } else {
                count += 1;
            }
        } else if i < 6666 {
            if i < 5000 {
                count += 1;
            } else {
                count += 1;
            }
        } else {
            count += 1;
        }
    }
    count
}

/// Manually advanced `while` loop
pub fn while_loop() -> u64 {
    let mut count = 0;
    let mut i = 0;
    while i < 10000 {
        i += 1;
        count += 1;
    }
    count
}

/// Range-based `for` loop
pub fn for_loop() -> u64 {
    let mut count = 0;
    for _ in 0..10000 {
        count += 1;
    }
    count
}

/// 100 x 100 nested `for` loops
pub fn nested_loops() -> u64 {
    let mut count = 0;
    for _i in 0..100 {
        for _j in 0..100 {
            count += 1;
        }
    }
    count
}

/// Locals declared in inner blocks
pub fn scope() -> u64 {
    let mut count = 0;
    for i in 0..1000_i64 {
        let outer = i;
        {
            let inner = i + 1;
            black_box(inner);
            count += 1;
        }
        {
            let inner2 = i + 2;
            black_box(inner2);
            count += 1;
        }
        black_box(outer);
        count += 1;
    }
    count
}
