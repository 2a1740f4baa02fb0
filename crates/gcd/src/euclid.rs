//! Iterative Euclidean variants.

use crate::error::GcdResult;
use crate::policy::{checked_abs, normalize_sign, zero_identity};

/// Plain Euclid over magnitudes. Total on `u64`, with `gcd_euclid(0, 0) == 0`.
pub fn gcd_euclid(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Exact number of steps the subtraction variants take on magnitudes `a` and
/// `b`, computed from the quotients of the remainder sequence.
///
/// Stops counting as soon as the total exceeds `cap`, so the return value is
/// only meaningful up to `cap + 1`.
pub fn subtraction_steps(mut a: u64, mut b: u64, cap: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    let mut steps = 0_u64;
    loop {
        if a < b {
            std::mem::swap(&mut a, &mut b);
        }
        let (quotient, remainder) = (a / b, a % b);
        if remainder == 0 {
            // The last run stops at `a == b`, one short of the quotient.
            return steps.saturating_add(quotient - 1);
        }
        steps = steps.saturating_add(quotient);
        if steps > cap {
            return steps;
        }
        a = remainder;
    }
}

/// `(a, b) -> (b, a mod b)` until `b == 0`.
///
/// Runs directly on the signed operands, so `i64::MIN` is accepted as long as
/// the divisor it produces fits in `i64`.
pub fn gcd_mod(a: i64, b: i64) -> GcdResult<i64> {
    if let Some(result) = zero_identity(a, b) {
        return result;
    }

    let (mut a, mut b) = (a, b);
    while b != 0 {
        // Only differs from `%` for `i64::MIN % -1`, where the true remainder is 0.
        let r = a.wrapping_rem(b);
        a = b;
        b = r;
    }
    normalize_sign(a)
}

/// Repeated subtraction on absolute values. Linear in the ratio of the
/// operands, so it is only practical when they are of similar size.
pub fn gcd_sub(a: i64, b: i64) -> GcdResult<i64> {
    if let Some(result) = zero_identity(a, b) {
        return result;
    }
    let mut a = checked_abs(a)?;
    let mut b = checked_abs(b)?;
    while a != b {
        if a > b {
            a -= b;
        } else {
            b -= a;
        }
    }
    Ok(a)
}

/// Same recurrence as [`gcd_mod`], with the remainder spelled out as
/// `a - b * (a / b)`.
pub fn gcd_div(a: i64, b: i64) -> GcdResult<i64> {
    if let Some(result) = zero_identity(a, b) {
        return result;
    }

    let (mut a, mut b) = (a, b);
    while b != 0 {
        // The true remainder always fits, so computing it modulo 2^64 is exact
        // even when the quotient itself (`i64::MIN / -1`) does not.
        let quotient = a.wrapping_div(b);
        let remainder = a.wrapping_sub(b.wrapping_mul(quotient));
        a = b;
        b = remainder;
    }
    normalize_sign(a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GcdError;

    #[test]
    fn euclid_kernel_known_cases() {
        let cases = [
            (0_u64, 0_u64, 0_u64),
            (0, 18, 18),
            (18, 0, 18),
            (54, 24, 6),
            (48, 180, 12),
            (17, 13, 1),
            (4096, 256, 256),
            (1 << 63, 6, 2),
            (u64::MAX, u64::MAX, u64::MAX),
            (u64::MAX, 1 << 63, 1),
            (1 << 63, (1 << 62) * 3 / 2, 1 << 61),
        ];

        for (a, b, expected) in cases {
            assert_eq!(gcd_euclid(a, b), expected);
        }
    }

    #[test]
    fn subtraction_steps_match_the_loop() {
        fn count(mut a: u64, mut b: u64) -> u64 {
            let mut steps = 0;
            while a != b {
                if a > b {
                    a -= b;
                } else {
                    b -= a;
                }
                steps += 1;
            }
            steps
        }

        for a in 1_u64..=40 {
            for b in 1_u64..=40 {
                assert_eq!(subtraction_steps(a, b, u64::MAX), count(a, b), "a={a} b={b}");
            }
        }
        assert_eq!(subtraction_steps(48, 18, u64::MAX), 4);
        assert_eq!(subtraction_steps(0, 7, 0), 0);
        assert_eq!(subtraction_steps(1 << 40, 1, u64::MAX), (1 << 40) - 1);
        assert!(subtraction_steps(u64::MAX, 1, 10) > 10);
        assert_eq!(subtraction_steps((1 << 40) + 1, 1 << 40, u64::MAX), 1 << 40);
    }

    #[test]
    fn negative_operands_give_non_negative_results() {
        for f in [gcd_mod, gcd_sub, gcd_div] {
            assert_eq!(f(-12, 8), Ok(4));
            assert_eq!(f(15, -10), Ok(5));
            assert_eq!(f(-20, -30), Ok(10));
            assert_eq!(f(-7, -7), Ok(7));
            assert_eq!(f(8, -12), Ok(4));
        }
    }

    #[test]
    fn modulo_and_division_agree() {
        for a in -60_i64..=60 {
            for b in -60_i64..=60 {
                assert_eq!(gcd_mod(a, b), gcd_div(a, b), "a={a} b={b}");
            }
        }
    }

    #[test]
    fn modulo_family_accepts_min_when_result_fits() {
        assert_eq!(gcd_mod(i64::MIN, 6), Ok(2));
        assert_eq!(gcd_div(i64::MIN, 6), Ok(2));
        assert_eq!(gcd_mod(6, i64::MIN), Ok(2));
        assert_eq!(gcd_mod(i64::MIN, -1), Ok(1));
        assert_eq!(gcd_div(i64::MIN, -1), Ok(1));
        assert_eq!(gcd_mod(i64::MIN, 1 << 40), Ok(1 << 40));
    }

    #[test]
    fn modulo_family_rejects_unrepresentable_results() {
        let overflow = Err(GcdError::Overflow { operand: i64::MIN });
        assert_eq!(gcd_mod(i64::MIN, 0), overflow);
        assert_eq!(gcd_mod(i64::MIN, i64::MIN), overflow);
        assert_eq!(gcd_div(0, i64::MIN), overflow);
        assert_eq!(gcd_div(i64::MIN, i64::MIN), overflow);
    }

    #[test]
    fn subtraction_rejects_min() {
        assert_eq!(
            gcd_sub(i64::MIN, 6),
            Err(GcdError::Overflow { operand: i64::MIN })
        );
        assert_eq!(
            gcd_sub(6, i64::MIN),
            Err(GcdError::Overflow { operand: i64::MIN })
        );
    }
}
