//! Stats command: dictionary and derivation graph counts

use std::io::{self, Write};
use std::path::Path;

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use wordladder_core::error::Result;
use wordladder_core::WordLadderSolver;

/// Execute the stats command
pub fn execute(cli: &Cli, solver: &WordLadderSolver, word_list: &Path) -> Result<()> {
    let stats = solver.graph_stats();
    let dedupe = solver.config().dedupe_edges;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Json => {
            let value = json!({
                "word_list": word_list.display().to_string(),
                "words": stats.words,
                "edges": stats.edges,
                "duplicate_edges": stats.duplicate_edges,
                "dedupe_edges": dedupe,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        OutputFormat::Human => {
            writeln!(out, "Word list: {}", word_list.display())?;
            writeln!(out, "Words: {}", stats.words)?;
            writeln!(out, "Edges: {}", stats.edges)?;
            writeln!(
                out,
                "Duplicate edges: {} ({})",
                stats.duplicate_edges,
                if dedupe { "skipped" } else { "kept" }
            )?;
        }
    }

    Ok(())
}
