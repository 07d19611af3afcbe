//! Ladder command: answer one START/END query

use std::io::{self, Write};

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use wordladder_core::error::Result;
use wordladder_core::{LadderResult, LadderStatus, WordLadderSolver};

/// Terminal message for each query outcome
pub fn status_message(status: LadderStatus) -> &'static str {
    match status {
        LadderStatus::Success => "Successfully built ladder:",
        LadderStatus::StartNotFound => "START word not found in word list",
        LadderStatus::EndNotFound => "END word not found in word list!",
        LadderStatus::SameWord => "They are the same word!",
        LadderStatus::NoLadder => "Cannot build a ladder with this word list!",
    }
}

/// Status line followed by one `- word` line per rung
pub fn write_human<W: Write>(out: &mut W, result: &LadderResult) -> io::Result<()> {
    writeln!(out, "{}", status_message(result.status))?;
    for word in &result.words {
        writeln!(out, "- {}", word)?;
    }
    Ok(())
}

pub fn to_json(result: &LadderResult) -> serde_json::Value {
    json!({
        "start": result.start,
        "end": result.end,
        "status": result.status,
        "code": result.status.code(),
        "words": result.words,
        "steps": result.steps(),
    })
}

/// Execute the ladder command
pub fn execute(cli: &Cli, solver: &mut WordLadderSolver, start: &str, end: &str) -> Result<()> {
    let result = solver.find_ladder(start, end);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&to_json(&result))?)?;
        }
        OutputFormat::Human => write_human(&mut out, &result)?,
    }

    Ok(())
}
