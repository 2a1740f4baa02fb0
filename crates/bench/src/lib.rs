use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Magnitude with exactly `bits` significant bits (its top bit set).
pub fn random_with_bits<R: Rng + ?Sized>(rng: &mut R, bits: u32) -> u64 {
    if bits == 0 {
        return 0;
    }

    let high_bit = (bits - 1).min(63);
    let min = 1_u64 << high_bit;
    let max = if bits >= 64 {
        u64::MAX
    } else {
        (1_u64 << bits) - 1
    };
    rng.random_range(min..=max)
}

/// Signed operand whose magnitude has exactly `bits` significant bits.
///
/// `bits` is capped at 63 so the value never reaches `i64::MIN`.
pub fn random_operand<R: Rng + ?Sized>(rng: &mut R, bits: u32) -> i64 {
    let magnitude = random_with_bits(rng, bits.min(63)) as i64;
    if rng.random_bool(0.5) {
        -magnitude
    } else {
        magnitude
    }
}

/// Pair `(g * p, g * q)` whose quotient terms stay below `max_ratio`.
///
/// Subtraction-based variants take `max(p, q)` steps, so this keeps them
/// benchmarkable next to the logarithmic ones.
pub fn random_bounded_ratio_pair<R: Rng + ?Sized>(
    rng: &mut R,
    bits: u32,
    max_ratio: u64,
) -> (i64, i64) {
    let max_ratio = max_ratio.max(1);
    let ratio_bits = 64 - max_ratio.leading_zeros();
    let g = random_with_bits(rng, bits.saturating_sub(ratio_bits).clamp(1, 62)) as i64;
    let p = rng.random_range(1..=max_ratio) as i64;
    let q = rng.random_range(1..=max_ratio) as i64;
    (g * p, g * q)
}
