//! Interactive prompt: read START/END pairs until an empty START

use std::io::{BufRead, Write};

use crate::cli::{Cli, OutputFormat};
use crate::commands::ladder::{to_json, write_human};
use wordladder_core::error::Result;
use wordladder_core::WordLadderSolver;

const BANNER: &str = "\
This program will (if possible) build a chain of words from START to END.
Each word is generated from the previous using one of these transformations:
1) Letter replacement (\"dog\" -> \"dig\").
2) Letter insertion (\"table\" -> \"stable\").
3) Letter deletion (\"tide\" -> \"tie\").
4) Swapping adjacent letters (\"rat\" -> \"art\").
Given a word list, the chain is guaranteed to be the shortest possible chain.
Enter nothing to exit.

=============================================================================
";

/// Execute the interactive loop over `input`, writing to `out`.
///
/// Human output prompts for each word; JSON output prints one result object
/// per line and no prompts. End of input ends the loop like an empty START.
pub fn execute<R: BufRead, W: Write>(
    cli: &Cli,
    solver: &mut WordLadderSolver,
    mut input: R,
    mut out: W,
) -> Result<()> {
    let human = cli.format == OutputFormat::Human;

    if human && !cli.quiet {
        writeln!(out, "{}", BANNER)?;
    }

    loop {
        if human {
            write!(out, "Enter START word: ")?;
            out.flush()?;
        }
        let Some(start) = read_line(&mut input)? else {
            break;
        };
        if start.is_empty() {
            break;
        }

        if human {
            write!(out, "Enter END word: ")?;
            out.flush()?;
        }
        let end = read_line(&mut input)?.unwrap_or_default();

        let result = solver.find_ladder(&start, &end);
        tracing::debug!(start = %start, end = %end, status = %result.status, "interactive query");

        match cli.format {
            OutputFormat::Human => {
                write_human(&mut out, &result)?;
                writeln!(out)?;
            }
            OutputFormat::Json => writeln!(out, "{}", to_json(&result))?,
        }
    }

    out.flush()?;
    Ok(())
}

/// One line without its terminator, or `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
