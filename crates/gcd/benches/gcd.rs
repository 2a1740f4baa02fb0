use std::hint::black_box;

use bench::{
    apply_medium_runtime_config, apply_small_runtime_config, default_rng, random_bounded_ratio_pair,
    random_operand,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gcd::{ALL_ALGORITHMS, Complexity};

const DATASET_SIZE: usize = 1024;

fn bench_gcd(c: &mut Criterion) {
    const BIT_LENGTHS: [u32; 8] = [8, 16, 24, 32, 40, 48, 56, 63];

    let mut rng = default_rng();

    let mut group = c.benchmark_group("gcd_bitlen");
    apply_small_runtime_config(&mut group);

    for &bits in &BIT_LENGTHS {
        let pairs = (0..DATASET_SIZE)
            .map(|_| {
                (
                    random_operand(&mut rng, bits),
                    random_operand(&mut rng, bits),
                )
            })
            .collect::<Vec<_>>();

        for &algo in &ALL_ALGORITHMS {
            // Linear variants would take ~2^bits steps on unrelated operands.
            if algo.complexity() == Complexity::Linear {
                continue;
            }
            group.bench_function(BenchmarkId::new(algo.name(), bits), |bencher| {
                bencher.iter(|| {
                    for &(a, b) in &pairs {
                        let _ = black_box(algo.gcd(black_box(a), black_box(b)));
                    }
                })
            });
        }
    }
    group.finish();
}

fn bench_gcd_bounded_ratio(c: &mut Criterion) {
    const MAX_RATIOS: [u64; 4] = [4, 16, 64, 256];
    const BITS: u32 = 48;

    let mut rng = default_rng();

    let mut group = c.benchmark_group("gcd_ratio");
    apply_medium_runtime_config(&mut group);

    for &max_ratio in &MAX_RATIOS {
        let pairs = (0..DATASET_SIZE)
            .map(|_| random_bounded_ratio_pair(&mut rng, BITS, max_ratio))
            .collect::<Vec<_>>();

        for &algo in &ALL_ALGORITHMS {
            group.bench_function(BenchmarkId::new(algo.name(), max_ratio), |bencher| {
                bencher.iter(|| {
                    for &(a, b) in &pairs {
                        let _ = black_box(algo.gcd(black_box(a), black_box(b)));
                    }
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_gcd, bench_gcd_bounded_ratio);
criterion_main!(benches);
