//! Command dispatch logic for wordladder

use std::time::Instant;

use crate::cli::Cli;
use tracing::debug;
use wordladder_core::error::Result;

mod command;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start)?;

    debug!(elapsed = ?start.elapsed(), word_list = %ctx.word_list.display(), "resolve_word_list");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
