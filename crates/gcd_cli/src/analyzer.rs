//! Runs the algorithms with timing and aggregates what they return.

use std::hint::black_box;
use std::time::{Duration, Instant};

use gcd::validation::{CaseFailure, run_known_cases};
use gcd::{
    ALL_ALGORITHMS, Algorithm, ExtendedGcd, GcdResult, LIMITS, check_consistency, gcd_extended,
};

use crate::session::Session;

#[derive(Clone, Debug)]
pub struct Execution {
    pub algorithm: Algorithm,
    pub outcome: GcdResult<i64>,
    pub elapsed: Duration,
}

#[derive(Clone, Copy, Debug)]
pub struct BenchmarkEntry {
    pub algorithm: Algorithm,
    pub runs: u32,
    pub average: Duration,
}

#[derive(Clone, Debug)]
pub struct SelfTest {
    pub algorithms: usize,
    pub quick_gcd: GcdResult<i64>,
    pub consistent: bool,
    pub failures: Vec<CaseFailure>,
}

impl SelfTest {
    pub fn passed(&self) -> bool {
        self.algorithms == ALL_ALGORITHMS.len()
            && self.quick_gcd == Ok(6)
            && self.consistent
            && self.failures.is_empty()
    }
}

/// Runs `algorithm` once. Only successful runs count towards the session.
pub fn execute(algorithm: Algorithm, a: i64, b: i64, session: &mut Session) -> Execution {
    let start = Instant::now();
    let outcome = black_box(algorithm.gcd(black_box(a), black_box(b)));
    let elapsed = start.elapsed();

    match &outcome {
        Ok(value) => {
            session.record(elapsed);
            log::debug!("{}: gcd({a}, {b}) = {value} in {elapsed:?}", algorithm.name());
        }
        Err(err) => log::debug!("{}: gcd({a}, {b}) rejected: {err}", algorithm.name()),
    }

    Execution {
        algorithm,
        outcome,
        elapsed,
    }
}

/// Whether `algorithm` can run on `(a, b)` without exceeding
/// [`LIMITS`]`.max_linear_steps`.
pub fn runnable(algorithm: Algorithm, a: i64, b: i64) -> bool {
    let ok = algorithm.within_limits(a, b);
    if !ok {
        log::info!(
            "{} skipped: gcd({a}, {b}) needs more than {} subtraction steps",
            algorithm.name(),
            LIMITS.max_linear_steps
        );
    }
    ok
}

/// Runs every algorithm that is [`runnable`] on the input, in declared order.
pub fn execute_all(a: i64, b: i64, session: &mut Session) -> Vec<Execution> {
    ALL_ALGORITHMS
        .iter()
        .filter(|&&algorithm| runnable(algorithm, a, b))
        .map(|&algorithm| execute(algorithm, a, b, session))
        .collect()
}

pub fn execute_extended(a: i64, b: i64, session: &mut Session) -> GcdResult<ExtendedGcd> {
    let start = Instant::now();
    let outcome = gcd_extended(a, b);
    let elapsed = start.elapsed();
    if outcome.is_ok() {
        session.record(elapsed);
    }
    outcome
}

pub fn is_consistent(executions: &[Execution]) -> bool {
    let outcomes: Vec<_> = executions.iter().map(|e| e.outcome).collect();
    check_consistency(&outcomes)
}

/// Averages `iterations` timed runs per algorithm.
///
/// Algorithms that reject the input or are not [`runnable`] on it are left
/// out; since every variant is deterministic, the first rejection ends that
/// algorithm's runs.
pub fn benchmark(a: i64, b: i64, iterations: u32, session: &mut Session) -> Vec<BenchmarkEntry> {
    if iterations == 0 {
        return Vec::new();
    }

    let mut entries = Vec::with_capacity(ALL_ALGORITHMS.len());
    for &algorithm in &ALL_ALGORITHMS {
        if !runnable(algorithm, a, b) {
            continue;
        }
        let mut total = Duration::ZERO;
        let mut runs = 0_u32;
        for _ in 0..iterations {
            let execution = execute(algorithm, a, b, session);
            if execution.outcome.is_err() {
                break;
            }
            total += execution.elapsed;
            runs += 1;
        }

        if runs == 0 {
            log::info!("{} skipped: input rejected", algorithm.name());
            continue;
        }
        entries.push(BenchmarkEntry {
            algorithm,
            runs,
            average: total / runs,
        });
    }
    entries
}

/// Single timed pass over every algorithm; `None` when all of them reject the
/// input.
pub fn find_fastest(a: i64, b: i64, session: &mut Session) -> Option<(Algorithm, Duration)> {
    execute_all(a, b, session)
        .into_iter()
        .filter(|e| e.outcome.is_ok())
        .min_by_key(|e| e.elapsed)
        .map(|e| (e.algorithm, e.elapsed))
}

pub fn self_test(session: &mut Session) -> SelfTest {
    let quick_gcd = execute(Algorithm::EuclidMod, 48, 18, session).outcome;
    let consistent = is_consistent(&execute_all(48, 18, session));
    let failures = run_known_cases();
    for failure in &failures {
        log::error!(
            "{}: gcd({}, {}) expected {}, got {:?}",
            failure.algorithm.name(),
            failure.a,
            failure.b,
            failure.expected,
            failure.actual
        );
    }

    SelfTest {
        algorithms: ALL_ALGORITHMS.len(),
        quick_gcd,
        consistent,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use gcd::{Complexity, GcdError};

    use super::*;

    #[test]
    fn execute_records_successes_only() {
        let mut session = Session::new();
        let ok = execute(Algorithm::BinaryStein, 48, 18, &mut session);
        assert_eq!(ok.outcome, Ok(6));
        assert_eq!(session.executions(), 1);

        let rejected = execute(Algorithm::BinaryStein, i64::MIN, 18, &mut session);
        assert_eq!(
            rejected.outcome,
            Err(GcdError::Overflow { operand: i64::MIN })
        );
        assert_eq!(session.executions(), 1);
    }

    #[test]
    fn execute_all_runs_in_declared_order() {
        let mut session = Session::new();
        let executions = execute_all(48, 18, &mut session);
        let order: Vec<_> = executions.iter().map(|e| e.algorithm).collect();
        assert_eq!(order, ALL_ALGORITHMS.to_vec());
        assert!(executions.iter().all(|e| e.outcome == Ok(6)));
        assert!(is_consistent(&executions));
        assert_eq!(session.executions(), 7);
    }

    #[test]
    fn min_operand_is_consistent_across_accepting_variants() {
        let mut session = Session::new();
        let executions = execute_all(i64::MIN, 6, &mut session);
        assert!(is_consistent(&executions));
        assert_eq!(session.executions(), 4);
    }

    #[test]
    fn extended_execution() {
        let mut session = Session::new();
        let r = execute_extended(48, 18, &mut session).unwrap();
        assert_eq!(r.gcd, 6);
        assert_eq!(48 * r.x + 18 * r.y, 6);
        assert_eq!(session.executions(), 1);
        assert!(execute_extended(i64::MIN, 0, &mut session).is_err());
        assert_eq!(session.executions(), 1);
    }

    #[test]
    fn benchmark_skips_rejecting_algorithms() {
        let mut session = Session::new();
        let entries = benchmark(48, 18, 10, &mut session);
        assert_eq!(entries.len(), 7);
        assert!(entries.iter().all(|e| e.runs == 10));
        assert_eq!(session.executions(), 70);

        let entries = benchmark(1_000_000, 1, 3, &mut Session::new());
        assert!(
            entries
                .iter()
                .all(|e| e.algorithm != Algorithm::EuclidSubRecursive)
        );
        assert_eq!(entries.len(), 6);

        assert!(benchmark(48, 18, 0, &mut session).is_empty());
    }

    #[test]
    fn fastest_is_one_of_the_accepting_algorithms() {
        let mut session = Session::new();
        let (algo, _) = find_fastest(i64::MIN, 6, &mut session).unwrap();
        assert!(!algo.needs_absolute_values());
        assert_eq!(find_fastest(i64::MIN, i64::MIN, &mut session), None);
    }

    #[test]
    fn linear_variants_are_skipped_on_large_quotients() {
        let (a, b) = (1_000_000_000_000_000_000, 1);
        let mut session = Session::new();
        let executions = execute_all(a, b, &mut session);
        assert_eq!(executions.len(), 5);
        assert!(
            executions
                .iter()
                .all(|e| e.algorithm.complexity() == Complexity::Logarithmic)
        );
        assert!(executions.iter().all(|e| e.outcome == Ok(1)));
        assert!(is_consistent(&executions));
        assert_eq!(session.executions(), 5);

        assert!(!runnable(Algorithm::EuclidSub, a, b));
        assert!(runnable(Algorithm::EuclidSub, 48, 18));

        let entries = benchmark(a, b, 3, &mut Session::new());
        assert_eq!(entries.len(), 5);

        let (fastest, _) = find_fastest(a, b, &mut Session::new()).unwrap();
        assert_eq!(fastest.complexity(), Complexity::Logarithmic);
    }

    #[test]
    fn self_test_passes() {
        let report = self_test(&mut Session::new());
        assert!(report.passed(), "{report:?}");
    }
}
