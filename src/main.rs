//! Entry point for the `chainup` CLI.
//!
//! Parses arguments, installs diagnostics, runs the chain update and maps
//! its outcome to an exit code. This is the only place the process ends.

use chainup::cli::Cli;
use chainup::commands::update::cmd_update;
use chainup::exit_codes;
use chainup::reporter::ConsoleReporter;
use std::process::ExitCode;
use tracing::Level;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let mut reporter = ConsoleReporter::new();
    match cmd_update(&cli, &mut reporter) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        // Already reported with context by the command.
        Err(err) => ExitCode::from(err.exit_code() as u8),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
