//! Variables, operators, strings and absent values

use std::hint::black_box;

/// Three locals and their sum per iteration
pub fn variables() -> u64 {
    let mut count = 0;
    for i in 0..10000_i64 {
        let a = i;
        let b = i + 1;
        let c = i + 2;
        let d = a + b + c;
        black_box(d);
        count += 1;
    }
    count
}

/// Add, subtract, multiply, divide and remainder
pub fn arithmetic() -> u64 {
    let mut count = 0;
    for i in 0..10000_i64 {
        let a = i + 5;
        let b = i - 3;
        let c = i * 2;
        let d = i as f64 / 2.0;
        let e = i % 3;
        black_box((a, b, c, d, e));
        count += 5;
    }
    count
}

/// All six comparison operators
pub fn comparison() -> u64 {
    let mut count = 0;
    for i in 0..10000_i64 {
        let a = i == 5000;
        let b = i != 5000;
        let c = i < 5000;
        let d = i > 5000;
        let e = i <= 5000;
        let f = i >= 5000;
        black_box((a, b, c, d, e, f));
        count += 6;
    }
    count
}

/// Negation and short-circuit `&&`/`||`
pub fn logical() -> u64 {
    let mut count = 0;
    for i in 0..10000_i64 {
        let yes = black_box(true);
        let no = black_box(false);
        let a = !yes;
        let b = i < 5000 && i > 0;
        let c = i < 0 || i > 5000;
        let d = yes && no;
        let e = yes || no;
        black_box((a, b, c, d, e));
        count += 5;
    }
    count
}

/// Repeated concatenation onto a growing string
pub fn strings() -> u64 {
    let mut count = 0;
    let mut result = String::new();
    for _ in 0..1000 {
        result = result + "a";
        count += 1;
    }
    black_box(result);
    count
}

/// Mixed operators with parentheses and float division
pub fn complex_expressions() -> u64 {
    let mut count = 0;
    for i in 0..10000_i64 {
        let result = ((i + 5) * 2 - 3) as f64 / 4.0 + ((i * 3) + 1) as f64 / 2.0;
        black_box(result);
        count += 1;
    }
    count
}

/// Reassigning five variables declared outside the loop
pub fn assignment() -> u64 {
    let mut count = 0;
    let (mut a, mut b, mut c, mut d, mut e) = (0_i64, 0_i64, 0_i64, 0_i64, 0_i64);
    for i in 0..10000_i64 {
        a = i;
        b = i + 1;
        c = i + 2;
        d = i + 3;
        e = i + 4;
        count += 5;
    }
    black_box((a, b, c, d, e));
    count
}

/// Checking and filling an absent value
pub fn nil_handling() -> u64 {
    let mut count = 0;
    for i in 0..10000_i64 {
        let mut x: Option<i64> = black_box(None);
        if x.is_none() {
            x = Some(i);
        }
        if x.is_some() {
            count += 1;
        }
    }
    count
}

/// Three variables feeding into each other every iteration
pub fn multiple_variables() -> u64 {
    let mut count = 0;
    let mut x: i64 = 0;
    let mut y: i64 = 1;
    let mut z: i64 = 2;
    for _ in 0..10000 {
        // Grows geometrically; wraps instead of overflowing.
        x = x.wrapping_add(y);
        y = y.wrapping_add(z);
        z = z.wrapping_add(x);
        x = x.wrapping_sub(1);
        y = y.wrapping_sub(1);
        z = z.wrapping_sub(1);
        count += 6;
    }
    black_box((x, y, z));
    count
}
