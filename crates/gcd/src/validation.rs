//! Result checks that are independent of the algorithm that produced them.
//!
//! Everything here answers with a verdict; nothing panics or returns an error
//! for a wrong result.

use crate::error::GcdResult;
use crate::euclid::gcd_euclid;
use crate::{ALL_ALGORITHMS, Algorithm};

/// Inputs with their expected divisor, shared by the self-test and the tests.
pub const KNOWN_CASES: [(i64, i64, i64); 9] = [
    (48, 18, 6),
    (17, 13, 1),
    (100, 25, 25),
    (0, 5, 5),
    (7, 0, 7),
    (0, 0, 0),
    (-12, 8, 4),
    (15, -10, 5),
    (-20, -30, 10),
];

/// Ground truth: iterative Euclid on magnitudes.
///
/// Total over all of `i64`; `reference_gcd(i64::MIN, 0)` is `2^63`.
pub fn reference_gcd(a: i64, b: i64) -> u64 {
    gcd_euclid(a.unsigned_abs(), b.unsigned_abs())
}

/// `false` if either operand is `i64::MIN`, the one value without an `i64`
/// absolute value.
pub fn validate_input(a: i64, b: i64) -> bool {
    a != i64::MIN && b != i64::MIN
}

/// Checks that `result` is the greatest common divisor of `a` and `b`.
pub fn validate(a: i64, b: i64, result: i64) -> bool {
    if a == 0 && b == 0 {
        return result == 0;
    }
    if result <= 0 {
        return false;
    }

    let divisor = result.unsigned_abs();
    let (abs_a, abs_b) = (a.unsigned_abs(), b.unsigned_abs());
    if abs_a % divisor != 0 || abs_b % divisor != 0 {
        return false;
    }
    // Any larger common divisor would leave a common factor here.
    gcd_euclid(abs_a / divisor, abs_b / divisor) == 1
}

/// [`validate`] plus the exact Bézout identity `a * x + b * y == g`.
pub fn validate_extended(a: i64, b: i64, g: i64, x: i64, y: i64) -> bool {
    if !validate(a, b, g) {
        return false;
    }
    let lhs = i128::from(a) * i128::from(x) + i128::from(b) * i128::from(y);
    lhs == i128::from(g)
}

/// Divisibility and maximality, commutativity against the reference, and
/// `gcd(a, 0) == |a|` / `gcd(0, b) == |b|`.
pub fn check_fundamental_properties(a: i64, b: i64, result: i64) -> bool {
    if !validate(a, b, result) {
        return false;
    }

    let result = result.unsigned_abs();
    if result != reference_gcd(b, a) {
        return false;
    }
    if b == 0 && result != a.unsigned_abs() {
        return false;
    }
    if a == 0 && result != b.unsigned_abs() {
        return false;
    }
    true
}

/// All successful results must carry the same value.
///
/// Rejected inputs are skipped; a collection without any successful result is
/// inconsistent.
pub fn check_consistency(results: &[GcdResult<i64>]) -> bool {
    let mut values = results.iter().filter_map(|r| r.as_ref().ok());
    let Some(&first) = values.next() else {
        return false;
    };
    values.all(|&v| v == first)
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CaseFailure {
    pub algorithm: Algorithm,
    pub a: i64,
    pub b: i64,
    pub expected: i64,
    pub actual: GcdResult<i64>,
}

/// Runs every algorithm over [`KNOWN_CASES`] and collects the mismatches.
pub fn run_known_cases() -> Vec<CaseFailure> {
    let mut failures = Vec::new();
    for &(a, b, expected) in &KNOWN_CASES {
        for &algorithm in &ALL_ALGORITHMS {
            let actual = algorithm.gcd(a, b);
            if actual != Ok(expected) {
                failures.push(CaseFailure {
                    algorithm,
                    a,
                    b,
                    expected,
                    actual,
                });
            }
        }
    }
    failures
}
