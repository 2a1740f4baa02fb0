use std::io;

use clap::Parser;
use gcd_cli::cli::Cli;
use gcd_cli::session::Session;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let mut session = Session::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    if let Err(e) = cli.run(stdin.lock(), &mut stdout, &mut session) {
        log::error!("{e:?}");
        std::process::exit(1);
    }
}
