//! Wordladder - shortest word ladder CLI
//!
//! Loads a word list, links every word to the words one edit away, and
//! answers ladder queries from the command line or interactively.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use wordladder_core::error::{ExitCode as LadderExitCode, LadderError};
use wordladder_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {e}");
    }
    tracing::debug!(elapsed = ?start.elapsed(), format = %cli.format, "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => LadderExitCode::Success.into(),
        Err(e) => report(&e, cli.format, cli.quiet),
    }
}

/// Help and version go to stdout through clap. Other parse failures keep
/// clap's own rendering unless JSON output was asked for.
fn usage_failure(err: clap::Error) -> ExitCode {
    if !err.use_stderr() {
        err.exit();
    }

    match Cli::requested_format(std::env::args_os()) {
        OutputFormat::Json => {
            let usage = LadderError::UsageError(err.to_string());
            report(&usage, OutputFormat::Json, false)
        }
        OutputFormat::Human => err.exit(),
    }
}

fn report(err: &LadderError, format: OutputFormat, quiet: bool) -> ExitCode {
    match format {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        OutputFormat::Human if !quiet => eprintln!("error: {err}"),
        OutputFormat::Human => {}
    }
    err.exit_code().into()
}
