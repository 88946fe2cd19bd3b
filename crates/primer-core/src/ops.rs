//! Pure operations demonstrated by the tutorial.
//!
//! Everything here is side-effect free; the session layer decides when and
//! how the results reach the console.

/// The fixed sequence used by the array demo.
pub const DEMO_NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];

/// Smallest accepted multiplication table size.
pub const TABLE_MIN: i64 = 1;
/// Largest accepted multiplication table size.
pub const TABLE_MAX: i64 = 10;

/// Sum of two integers, no overflow checking.
pub fn add_numbers(a: i64, b: i64) -> i64 {
    a + b
}

/// Whether `n` is even. Rust's `%` truncates toward zero, so this holds for
/// negative `n` as well.
pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// Whether `n` is an accepted multiplication table size.
pub fn table_size_in_range(n: i64) -> bool {
    (TABLE_MIN..=TABLE_MAX).contains(&n)
}

/// Render an `n`x`n` multiplication table, row-major. Each entry is followed
/// by a tab, each row by a newline.
pub fn multiplication_table(n: i64) -> String {
    let mut out = String::new();
    for i in 1..=n {
        for j in 1..=n {
            out.push_str(&format!("{}\t", i * j));
        }
        out.push('\n');
    }
    out
}

/// Left-to-right accumulated sum of a slice.
pub fn array_sum(values: &[i64]) -> i64 {
    values.iter().fold(0, |acc, v| acc + v)
}
