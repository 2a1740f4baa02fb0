use std::io::{BufRead, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use gcd::{Algorithm, LIMITS};
use miette::{IntoDiagnostic, Result, WrapErr, bail};

use crate::{analyzer, interactive, report, session::Session};

/// Command-line names for the algorithm variants.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum AlgorithmArg {
    #[value(name = "modulo", aliases = ["mod", "euclid-mod"])]
    Modulo,
    #[value(name = "subtraction", aliases = ["sub", "euclid-sub"])]
    Subtraction,
    #[value(name = "division", aliases = ["div", "euclid-div"])]
    Division,
    #[value(
        name = "rec-mod",
        aliases = ["rec_mod", "recursive-modulo", "euclid-mod-recursive"]
    )]
    RecursiveModulo,
    #[value(
        name = "rec-sub",
        aliases = ["rec_sub", "recursive-subtraction", "euclid-sub-recursive"]
    )]
    RecursiveSubtraction,
    #[value(name = "extended", aliases = ["ext", "euclid-extended"])]
    Extended,
    #[value(name = "stein", aliases = ["binary", "binary-stein"])]
    Stein,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Modulo => Algorithm::EuclidMod,
            AlgorithmArg::Subtraction => Algorithm::EuclidSub,
            AlgorithmArg::Division => Algorithm::EuclidDiv,
            AlgorithmArg::RecursiveModulo => Algorithm::EuclidModRecursive,
            AlgorithmArg::RecursiveSubtraction => Algorithm::EuclidSubRecursive,
            AlgorithmArg::Extended => Algorithm::EuclidExtended,
            AlgorithmArg::Stein => Algorithm::BinaryStein,
        }
    }
}

impl AlgorithmArg {
    /// Case-insensitive lookup that also accepts every alias.
    pub fn parse(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

#[derive(Args, Clone, Copy, Debug)]
pub struct Operands {
    /// First operand.
    #[arg(allow_negative_numbers = true)]
    pub a: i64,

    /// Second operand.
    #[arg(allow_negative_numbers = true)]
    pub b: i64,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available algorithms.
    #[clap(alias = "ls")]
    List {
        /// Show family, complexity and recursion details.
        #[clap(short, long)]
        details: bool,
    },

    /// Execute a single algorithm.
    #[clap(aliases = ["exec", "run"])]
    Execute {
        /// Algorithm to run (defaults to modulo).
        #[clap(short, long, value_enum)]
        algorithm: Option<AlgorithmArg>,

        #[command(flatten)]
        operands: Operands,
    },

    /// Run every algorithm and check that they agree.
    #[clap(alias = "comp")]
    Compare {
        #[command(flatten)]
        operands: Operands,
    },

    /// Average the running time of every algorithm over several runs.
    #[clap(alias = "bench")]
    Benchmark {
        /// Runs per algorithm.
        #[clap(short, long, default_value_t = 1000)]
        iterations: u32,

        #[command(flatten)]
        operands: Operands,
    },

    /// Extended Euclidean algorithm with Bezout coefficients.
    #[clap(alias = "ext")]
    Extended {
        #[command(flatten)]
        operands: Operands,
    },

    /// Find the fastest algorithm for the input.
    #[clap(alias = "fast")]
    Fastest {
        #[command(flatten)]
        operands: Operands,
    },

    /// Show the session summary.
    #[clap(alias = "stat")]
    Status,

    /// Run the built-in self-test.
    #[clap(alias = "selftest")]
    Test,

    /// Read commands from standard input.
    #[clap(alias = "i")]
    Interactive,
}

#[derive(Debug, Parser)]
#[command(name = "gcd_analyzer")]
#[command(version = concat!("v", env!("CARGO_PKG_VERSION")))]
#[command(about = "Execute, time, validate and compare GCD algorithms.")]
pub struct Cli {
    #[command(subcommand)]
    pub commands: Commands,

    /// Print the session summary after the command.
    #[arg(short, long, global = true)]
    pub summary: bool,

    #[clap(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}

impl Cli {
    pub fn run(
        &self,
        input: impl BufRead,
        out: &mut impl Write,
        session: &mut Session,
    ) -> Result<()> {
        let res = self.dispatch(input, out, session);
        if self.summary && !matches!(self.commands, Commands::Status) {
            report::write_status(out, session).into_diagnostic()?;
        }
        res
    }

    fn dispatch(
        &self,
        input: impl BufRead,
        out: &mut impl Write,
        session: &mut Session,
    ) -> Result<()> {
        match &self.commands {
            Commands::List { details } => report::write_list(out, *details).into_diagnostic(),
            Commands::Execute {
                algorithm,
                operands: Operands { a, b },
            } => {
                let algo = algorithm.map_or(Algorithm::EuclidMod, Algorithm::from);
                if !analyzer::runnable(algo, *a, *b) {
                    bail!(
                        "{} would need more than {} subtraction steps for gcd({a}, {b})",
                        algo.label(),
                        LIMITS.max_linear_steps
                    );
                }
                let execution = analyzer::execute(algo, *a, *b, session);
                report::write_execution(out, *a, *b, &execution, algorithm.is_none())
                    .into_diagnostic()?;
                execution
                    .outcome
                    .into_diagnostic()
                    .wrap_err(format!("{} could not compute gcd({a}, {b})", algo.label()))?;
                Ok(())
            }
            Commands::Compare {
                operands: Operands { a, b },
            } => {
                let executions = analyzer::execute_all(*a, *b, session);
                let consistent = analyzer::is_consistent(&executions);
                report::write_comparison(out, *a, *b, &executions, consistent)
                    .into_diagnostic()?;
                if !consistent {
                    bail!("algorithms disagree on gcd({a}, {b})");
                }
                Ok(())
            }
            Commands::Benchmark {
                iterations,
                operands: Operands { a, b },
            } => {
                let entries = analyzer::benchmark(*a, *b, *iterations, session);
                report::write_benchmark(out, *a, *b, *iterations, &entries).into_diagnostic()
            }
            Commands::Extended {
                operands: Operands { a, b },
            } => {
                let outcome = analyzer::execute_extended(*a, *b, session);
                report::write_extended(out, *a, *b, &outcome).into_diagnostic()?;
                outcome
                    .into_diagnostic()
                    .wrap_err(format!("extended gcd({a}, {b}) failed"))?;
                Ok(())
            }
            Commands::Fastest {
                operands: Operands { a, b },
            } => {
                let fastest = analyzer::find_fastest(*a, *b, session);
                report::write_fastest(out, *a, *b, fastest).into_diagnostic()?;
                if fastest.is_none() {
                    bail!("no algorithm accepted gcd({a}, {b})");
                }
                Ok(())
            }
            Commands::Status => report::write_status(out, session).into_diagnostic(),
            Commands::Test => {
                let result = analyzer::self_test(session);
                report::write_self_test(out, &result).into_diagnostic()?;
                if !result.passed() {
                    bail!("self-test failed");
                }
                Ok(())
            }
            Commands::Interactive => interactive::run(input, out, session)
                .into_diagnostic()
                .wrap_err("interactive session aborted"),
        }
    }
}
