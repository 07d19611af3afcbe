//! CLI argument parsing for wordladder
//!
//! Global flags: --word-list, --config, --format, --quiet, --verbose

pub mod output;

use clap::{CommandFactory, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

pub use output::OutputFormat;

/// Wordladder - build the shortest chain of words from START to END
#[derive(Parser, Debug)]
#[command(name = "wordladder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Word list file (whitespace-delimited tokens)
    #[arg(long, short = 'w', global = true, env = "WORDLADDER_WORD_LIST")]
    pub word_list: Option<PathBuf>,

    /// Config file (defaults to ~/.config/wordladder/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, or a full directive like wordladder_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The `--format` named in arguments that failed to parse, if clap got
    /// far enough to read it. Falls back to human output.
    pub fn requested_format<I, T>(args: I) -> OutputFormat
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::command()
            .ignore_errors(true)
            .try_get_matches_from(args)
            .ok()
            .and_then(|matches| matches.try_get_one::<OutputFormat>("format").ok().flatten().copied())
            .unwrap_or_default()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the shortest ladder between two words
    Ladder {
        /// Starting word
        start: String,

        /// Target word
        end: String,
    },

    /// Prompt for START and END words until an empty START is entered
    Interactive,

    /// Show dictionary and derivation graph statistics
    Stats,
}
