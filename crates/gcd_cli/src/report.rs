//! Console rendering. Every writer takes `impl Write` so output can be
//! captured in tests.

use std::io::{self, Write};
use std::time::Duration;

use gcd::{ALL_ALGORITHMS, Algorithm, Complexity, ExtendedGcd, Family, GcdResult};

use crate::analyzer::{BenchmarkEntry, Execution, SelfTest};
use crate::session::Session;

const NAME_WIDTH: usize = 22;

pub fn format_ms(elapsed: Duration) -> String {
    format!("{:.6} ms", elapsed.as_secs_f64() * 1e3)
}

fn family_label(family: Family) -> &'static str {
    match family {
        Family::Euclidean => "euclidean",
        Family::Binary => "binary",
    }
}

fn complexity_label(complexity: Complexity) -> &'static str {
    match complexity {
        Complexity::Logarithmic => "O(log n)",
        Complexity::Linear => "O(n)",
    }
}

pub fn write_list(out: &mut impl Write, details: bool) -> io::Result<()> {
    writeln!(out, "Available GCD Algorithms:")?;
    for (i, algo) in ALL_ALGORITHMS.iter().enumerate() {
        if details {
            writeln!(out, "  {}. {} [{}]", i + 1, algo.label(), algo.name())?;
            writeln!(out, "     {}", algo.description())?;
            writeln!(
                out,
                "     family: {}, complexity: {}, recursive: {}",
                family_label(algo.family()),
                complexity_label(algo.complexity()),
                if algo.is_recursive() { "yes" } else { "no" }
            )?;
        } else {
            writeln!(out, "  {}. {}", i + 1, algo.label())?;
        }
    }
    writeln!(out, "\nTotal: {} algorithms\n", ALL_ALGORITHMS.len())
}

pub fn write_execution(
    out: &mut impl Write,
    a: i64,
    b: i64,
    execution: &Execution,
    is_default: bool,
) -> io::Result<()> {
    let suffix = if is_default { " (default)" } else { "" };
    writeln!(out, "Algorithm: {}{suffix}", execution.algorithm.label())?;
    writeln!(out, "Input: gcd({a}, {b})")?;
    match &execution.outcome {
        Ok(value) => {
            writeln!(out, "Result: {value}")?;
            writeln!(out, "Time: {}", format_ms(execution.elapsed))?;
        }
        Err(err) => writeln!(out, "Error: {err}")?,
    }
    writeln!(out)
}

pub fn write_comparison(
    out: &mut impl Write,
    a: i64,
    b: i64,
    executions: &[Execution],
    consistent: bool,
) -> io::Result<()> {
    writeln!(out, "=== GCD Algorithm Comparison ===")?;
    writeln!(out, "Input: gcd({a}, {b})\n")?;
    for algorithm in ALL_ALGORITHMS {
        let label = algorithm.label();
        let Some(execution) = executions.iter().find(|e| e.algorithm == algorithm) else {
            writeln!(out, "{label:<w$}: SKIPPED (too many subtraction steps)", w = NAME_WIDTH)?;
            continue;
        };
        match &execution.outcome {
            Ok(value) => writeln!(
                out,
                "{label:<w$}: GCD = {value} | Time: {}",
                format_ms(execution.elapsed),
                w = NAME_WIDTH
            )?,
            Err(err) => writeln!(out, "{label:<w$}: ERROR ({err})", w = NAME_WIDTH)?,
        }
    }
    writeln!(out)?;
    if consistent {
        writeln!(out, "All algorithms produced consistent results\n")
    } else {
        writeln!(out, "WARNING: Inconsistent results detected!\n")
    }
}

pub fn write_extended(
    out: &mut impl Write,
    a: i64,
    b: i64,
    outcome: &GcdResult<ExtendedGcd>,
) -> io::Result<()> {
    writeln!(out, "=== Extended Euclidean Algorithm ===")?;
    writeln!(out, "Input: gcd({a}, {b})")?;
    match outcome {
        Ok(r) => {
            let lhs = i128::from(a) * i128::from(r.x) + i128::from(b) * i128::from(r.y);
            writeln!(out, "GCD = {}", r.gcd)?;
            writeln!(out, "Coefficients: x = {}, y = {}", r.x, r.y)?;
            writeln!(out, "Verification: {a}*{} + {b}*{} = {lhs}", r.x, r.y)?;
        }
        Err(err) => writeln!(out, "Error: {err}")?,
    }
    writeln!(out)
}

pub fn write_benchmark(
    out: &mut impl Write,
    a: i64,
    b: i64,
    iterations: u32,
    entries: &[BenchmarkEntry],
) -> io::Result<()> {
    writeln!(out, "=== Algorithm Benchmark ===")?;
    writeln!(out, "Input: gcd({a}, {b})")?;
    writeln!(out, "Iterations per algorithm: {iterations}\n")?;
    for entry in entries {
        writeln!(
            out,
            "{:<w$}: Avg Time: {} | Runs: {}",
            entry.algorithm.label(),
            format_ms(entry.average),
            entry.runs,
            w = NAME_WIDTH
        )?;
    }
    let skipped = ALL_ALGORITHMS.len() - entries.len();
    if skipped > 0 {
        writeln!(out, "({skipped} algorithm(s) rejected the input)")?;
    }
    writeln!(out)
}

pub fn write_fastest(
    out: &mut impl Write,
    a: i64,
    b: i64,
    fastest: Option<(Algorithm, Duration)>,
) -> io::Result<()> {
    match fastest {
        Some((algo, elapsed)) => {
            writeln!(out, "=== Fastest Algorithm Analysis ===")?;
            writeln!(out, "Input: gcd({a}, {b})")?;
            writeln!(out, "Fastest: {}", algo.label())?;
            writeln!(out, "Time: {}\n", format_ms(elapsed))
        }
        None => writeln!(out, "Error: no algorithm accepted gcd({a}, {b})\n"),
    }
}

pub fn write_status(out: &mut impl Write, session: &Session) -> io::Result<()> {
    writeln!(out, "=== Session Summary ===")?;
    writeln!(out, "Available Algorithms: {}", ALL_ALGORITHMS.len())?;
    writeln!(out, "Total Executions: {}", session.executions())?;
    writeln!(out, "Total Execution Time: {}", format_ms(session.total_time()))?;
    if let Some(average) = session.average_time() {
        writeln!(out, "Average Execution Time: {}", format_ms(average))?;
    }
    writeln!(out)
}

pub fn write_self_test(out: &mut impl Write, report: &SelfTest) -> io::Result<()> {
    writeln!(out, "=== Self-Test ===")?;
    writeln!(out, "Algorithms available: {}", report.algorithms)?;
    match report.quick_gcd {
        Ok(6) => writeln!(out, "ok   gcd(48, 18) = 6")?,
        other => writeln!(out, "FAIL gcd(48, 18): expected 6, got {other:?}")?,
    }
    if report.consistent {
        writeln!(out, "ok   all algorithms agree on gcd(48, 18)")?;
    } else {
        writeln!(out, "FAIL algorithms disagree on gcd(48, 18)")?;
    }
    if report.failures.is_empty() {
        writeln!(out, "ok   known cases")?;
    }
    for failure in &report.failures {
        writeln!(
            out,
            "FAIL {}: gcd({}, {}) expected {}, got {:?}",
            failure.algorithm.name(),
            failure.a,
            failure.b,
            failure.expected,
            failure.actual
        )?;
    }
    let verdict = if report.passed() { "passed" } else { "failed" };
    writeln!(out, "Self-test {verdict}\n")
}
