//! Command trait and context for dispatching commands

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;
use wordladder_core::config::SolverConfig;
use wordladder_core::error::Result;
use wordladder_core::wordlist::read_word_list;
use wordladder_core::WordLadderSolver;

/// Load the config named on the command line, or the per-user one
pub fn load_config(cli: &Cli) -> Result<SolverConfig> {
    match &cli.config {
        Some(path) => SolverConfig::load(path),
        None => SolverConfig::load_default(),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
    pub word_list: PathBuf,
    config: SolverConfig,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = load_config(cli)?;
        let word_list = config.resolve_word_list(cli.word_list.as_deref());
        Ok(Self {
            cli,
            start,
            word_list,
            config,
        })
    }

    /// Read the word list and build a ready-to-query solver
    pub fn load_solver(&self) -> Result<WordLadderSolver> {
        let words = read_word_list(&self.word_list)?;
        debug!(elapsed = ?self.start.elapsed(), tokens = words.len(), "read_word_list");

        let mut solver = WordLadderSolver::with_config(self.config.clone());
        solver.load(&words);
        debug!(elapsed = ?self.start.elapsed(), words = solver.dictionary().len(), "load_solver");

        if solver.dictionary().is_empty() {
            tracing::warn!(path = %self.word_list.display(), "word list contains no usable words");
        }

        Ok(solver)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No subcommand: run the interactive prompt
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        Commands::Interactive.execute(ctx)
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let mut solver = ctx.load_solver()?;

        let result = match self {
            Commands::Ladder { start, end } => {
                commands::ladder::execute(ctx.cli, &mut solver, start, end)
            }
            Commands::Interactive => {
                let stdin = io::stdin();
                let stdout = io::stdout();
                commands::interactive::execute(ctx.cli, &mut solver, stdin.lock(), stdout.lock())
            }
            Commands::Stats => commands::stats::execute(ctx.cli, &solver, &ctx.word_list),
        };

        debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}
