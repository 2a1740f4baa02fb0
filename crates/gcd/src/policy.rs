//! Edge-case and overflow rules shared by every variant.

use crate::error::{GcdError, GcdResult};

#[inline]
pub fn checked_abs(value: i64) -> GcdResult<i64> {
    value.checked_abs().ok_or_else(|| {
        log::debug!("rejecting {value}: absolute value overflows i64");
        GcdError::Overflow { operand: value }
    })
}

/// `gcd(0, 0) = 0`, `gcd(a, 0) = |a|`, `gcd(0, b) = |b|`.
///
/// Returns `None` when both operands are non-zero and the caller has to run
/// the actual algorithm.
#[inline]
pub fn zero_identity(a: i64, b: i64) -> Option<GcdResult<i64>> {
    match (a, b) {
        (0, 0) => Some(Ok(0)),
        (a, 0) => Some(checked_abs(a)),
        (0, b) => Some(checked_abs(b)),
        _ => None,
    }
}

/// Rejects `i64::MIN` up front for variants that take absolute values before
/// they start.
#[inline]
pub fn require_representable(a: i64, b: i64) -> GcdResult<()> {
    checked_abs(a)?;
    checked_abs(b)?;
    Ok(())
}

/// Truncating remainder keeps the sign of the dividend, so the modulo and
/// division loops can finish on `-g`.
#[inline]
pub fn normalize_sign(value: i64) -> GcdResult<i64> {
    checked_abs(value)
}
