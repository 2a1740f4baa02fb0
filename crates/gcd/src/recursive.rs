//! Recursive Euclidean variants, including the extended algorithm.

use crate::LIMITS;
use crate::error::{GcdError, GcdResult};
use crate::policy::{checked_abs, normalize_sign, zero_identity};

/// `gcd(a, b)` together with Bézout coefficients: `a * x + b * y == gcd`.
///
/// The coefficients are the ones the back-substitution produces; they are not
/// reduced to any canonical range.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ExtendedGcd {
    pub gcd: i64,
    pub x: i64,
    pub y: i64,
}

/// `f(a, b) = a` if `b == 0`, else `f(b, a mod b)`.
pub fn gcd_mod_recursive(a: i64, b: i64) -> GcdResult<i64> {
    if let Some(result) = zero_identity(a, b) {
        return result;
    }
    normalize_sign(mod_step(a, b))
}

fn mod_step(a: i64, b: i64) -> i64 {
    if b == 0 {
        return a;
    }
    mod_step(b, a.wrapping_rem(b))
}

/// Recursive subtraction bounded by [`LIMITS`]`.max_subtraction_depth`.
///
/// Depth grows with `max(|a|, |b|) / min(|a|, |b|)`, so inputs such as
/// `(10^18, 1)` are rejected with [`GcdError::RecursionLimit`] instead of
/// exhausting the stack.
pub fn gcd_sub_recursive(a: i64, b: i64) -> GcdResult<i64> {
    gcd_sub_recursive_bounded(a, b, LIMITS.max_subtraction_depth)
}

/// Recursive subtraction allowing at most `max_depth` subtraction steps.
///
/// The bound is clamped to [`LIMITS`]`.max_subtraction_depth`, since every
/// step is a stack frame. Operands are replaced by their absolute values
/// first; without that the comparisons never converge for negative inputs.
pub fn gcd_sub_recursive_bounded(a: i64, b: i64, max_depth: usize) -> GcdResult<i64> {
    if let Some(result) = zero_identity(a, b) {
        return result;
    }
    let limit = max_depth.min(LIMITS.max_subtraction_depth);
    sub_step(checked_abs(a)?, checked_abs(b)?, 0, limit)
}

fn sub_step(a: i64, b: i64, depth: usize, limit: usize) -> GcdResult<i64> {
    if a == b {
        return Ok(a);
    }
    if depth == limit {
        log::debug!("recursive subtraction hit depth limit {limit}");
        return Err(GcdError::RecursionLimit { limit });
    }
    if a > b {
        sub_step(a - b, b, depth + 1, limit)
    } else {
        sub_step(a, b - a, depth + 1, limit)
    }
}

/// Extended Euclid via back-substitution.
///
/// Base case `b == 0` yields `(a, 1, 0)`; otherwise with
/// `(g, x1, y1) = f(b, a mod b)` the result is `(g, y1, x1 - (a / b) * y1)`.
/// A negative `g` (from truncating remainders) is flipped together with both
/// coefficients, which keeps the identity intact.
pub fn gcd_extended(a: i64, b: i64) -> GcdResult<ExtendedGcd> {
    let (gcd, x, y) = extended_step(a, b);
    if gcd >= 0 {
        return Ok(ExtendedGcd { gcd, x, y });
    }

    match (gcd.checked_neg(), x.checked_neg(), y.checked_neg()) {
        (Some(gcd), Some(x), Some(y)) => Ok(ExtendedGcd { gcd, x, y }),
        _ => {
            let operand = if a == i64::MIN { a } else { b };
            log::debug!("rejecting extended gcd({a}, {b}): divisor 2^63 overflows i64");
            Err(GcdError::Overflow { operand })
        }
    }
}

fn extended_step(a: i64, b: i64) -> (i64, i64, i64) {
    if b == 0 {
        return (a, 1, 0);
    }
    let (gcd, x1, y1) = extended_step(b, a.wrapping_rem(b));
    // Final coefficients are bounded by max(|a|, |b|) / gcd, so arithmetic
    // modulo 2^64 lands on the exact values.
    let quotient = a.wrapping_div(b);
    (gcd, y1, x1.wrapping_sub(quotient.wrapping_mul(y1)))
}
