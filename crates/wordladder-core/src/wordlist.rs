//! Word list loading
//!
//! A word list is any byte stream with one token per whitespace-delimited
//! entry. Tokens are returned raw; normalization happens in the dictionary.
//! The stream need not be UTF-8: invalid bytes become U+FFFD and are later
//! dropped by normalization along with every other non-letter.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use crate::error::{LadderError, Result};

/// Split `reader` into ASCII-whitespace-delimited tokens
pub fn parse_word_list<R: Read>(mut reader: R) -> Result<Vec<String>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    Ok(bytes
        .split(u8::is_ascii_whitespace)
        .filter(|token| !token.is_empty())
        .map(|token| String::from_utf8_lossy(token).into_owned())
        .collect())
}

/// Read the word list at `path`
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LadderError::WordListNotFound {
            path: path.to_path_buf(),
        },
        _ => LadderError::io_operation("open word list", path.display(), e),
    })?;

    let words = parse_word_list(BufReader::new(file))
        .map_err(|e| LadderError::io_operation("read word list", path.display(), e))?;

    tracing::debug!(tokens = words.len(), "word list read");
    Ok(words)
}
