//! Stein's binary GCD.

use crate::error::GcdResult;
use crate::policy::{require_representable, zero_identity};

/// Binary GCD on signed operands.
///
/// Shifting a negative `i64` is arithmetic and never clears the sign bit, so
/// the kernel only ever sees magnitudes. `i64::MIN` is rejected because its
/// magnitude has no `i64` representation.
pub fn gcd_binary(a: i64, b: i64) -> GcdResult<i64> {
    if let Some(result) = zero_identity(a, b) {
        return result;
    }
    require_representable(a, b)?;

    // Both magnitudes are at most i64::MAX, and so is their divisor.
    Ok(gcd_stein(a.unsigned_abs(), b.unsigned_abs()) as i64)
}

/// Stein's algorithm over magnitudes: shifts, comparisons and subtraction only.
pub fn gcd_stein(mut a: u64, mut b: u64) -> u64 {
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }

    let shift = (a | b).trailing_zeros();
    a >>= a.trailing_zeros();

    loop {
        // `a` is odd here.
        b >>= b.trailing_zeros();
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        b -= a;
        if b == 0 {
            return a << shift;
        }
    }
}
