//! Line-oriented shell sharing the caller's session.

use std::io::{self, BufRead, Write};

use crate::analyzer;
use crate::cli::AlgorithmArg;
use crate::report;
use crate::session::Session;

const PROMPT: &str = "gcd> ";

fn write_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Interactive commands:")?;
    writeln!(out, "  help                     Show this help")?;
    writeln!(out, "  list                     List algorithms")?;
    writeln!(out, "  <algorithm> <a> <b>      Execute algorithm")?;
    writeln!(out, "  compare <a> <b>          Compare all algorithms")?;
    writeln!(out, "  extended <a> <b>         Extended Euclidean")?;
    writeln!(out, "  status                   Show session summary")?;
    writeln!(out, "  quit, exit               Exit interactive mode\n")
}

fn parse_operands(a: &str, b: &str) -> Option<(i64, i64)> {
    Some((a.parse().ok()?, b.parse().ok()?))
}

/// Reads commands until `quit`, `exit` or end of input.
pub fn run(input: impl BufRead, out: &mut impl Write, session: &mut Session) -> io::Result<()> {
    writeln!(out, "=== Interactive GCD Analysis Mode ===")?;
    writeln!(out, "Type 'help' for commands, 'quit' to exit\n")?;

    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => continue,
            ["quit" | "exit"] => break,
            ["help"] => write_help(out)?,
            ["list"] => report::write_list(out, false)?,
            ["status"] => report::write_status(out, session)?,
            [command, a, b] => {
                let Some((a, b)) = parse_operands(a, b) else {
                    writeln!(out, "Operands must be 64-bit integers.\n")?;
                    continue;
                };
                match *command {
                    "compare" => {
                        let executions = analyzer::execute_all(a, b, session);
                        let consistent = analyzer::is_consistent(&executions);
                        report::write_comparison(out, a, b, &executions, consistent)?;
                    }
                    "extended" => {
                        let outcome = analyzer::execute_extended(a, b, session);
                        report::write_extended(out, a, b, &outcome)?;
                    }
                    name => match AlgorithmArg::parse(name) {
                        Some(arg) if !analyzer::runnable(arg.into(), a, b) => writeln!(
                            out,
                            "Skipped: gcd({a}, {b}) needs too many subtraction steps.\n"
                        )?,
                        Some(arg) => {
                            let execution = analyzer::execute(arg.into(), a, b, session);
                            report::write_execution(out, a, b, &execution, false)?;
                        }
                        None => writeln!(out, "Unknown algorithm '{name}'.\n")?,
                    },
                }
            }
            _ => writeln!(out, "Invalid command. Type 'help' for available commands.\n")?,
        }
    }

    log::debug!("interactive session ended after {} executions", session.executions());
    writeln!(out, "Exiting interactive mode.")
}
