//! The four allowed single edits and candidate generation

use std::fmt;

use serde::Serialize;

/// One allowed single-character edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditOperation {
    /// Replace one letter ("dog" -> "dig")
    Substitution,
    /// Insert one letter ("table" -> "stable")
    Insertion,
    /// Swap two adjacent letters ("rat" -> "art")
    Swap,
    /// Delete one letter ("tide" -> "tie")
    Deletion,
}

impl EditOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditOperation::Substitution => "substitution",
            EditOperation::Insertion => "insertion",
            EditOperation::Swap => "swap",
            EditOperation::Deletion => "deletion",
        }
    }
}

impl fmt::Display for EditOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A word produced from a root by one edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub word: String,
    pub operation: EditOperation,
}

const ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';

/// Visit every single-edit candidate of `root`, in generation order.
///
/// Order: substitutions (positions ascending, letters a..z), insertions
/// (positions 0..=len, letters a..z), adjacent swaps, deletions. The
/// substitution pass includes the no-op candidate equal to `root`, and
/// duplicates are emitted as generated.
pub fn for_each_candidate<F>(root: &str, mut visit: F)
where
    F: FnMut(&str, EditOperation),
{
    let letters: Vec<char> = root.chars().collect();
    let len = letters.len();
    let mut buf = String::with_capacity(len + 1);

    for i in 0..len {
        for c in ALPHABET {
            buf.clear();
            buf.extend(letters[..i].iter());
            buf.push(c);
            buf.extend(letters[i + 1..].iter());
            visit(&buf, EditOperation::Substitution);
        }
    }

    for i in 0..=len {
        for c in ALPHABET {
            buf.clear();
            buf.extend(letters[..i].iter());
            buf.push(c);
            buf.extend(letters[i..].iter());
            visit(&buf, EditOperation::Insertion);
        }
    }

    // Roots of length 0 or 1 have no adjacent pair
    for i in 0..len.saturating_sub(1) {
        buf.clear();
        buf.extend(letters[..i].iter());
        buf.push(letters[i + 1]);
        buf.push(letters[i]);
        buf.extend(letters[i + 2..].iter());
        visit(&buf, EditOperation::Swap);
    }

    for i in 0..len {
        buf.clear();
        buf.extend(letters[..i].iter());
        buf.extend(letters[i + 1..].iter());
        visit(&buf, EditOperation::Deletion);
    }
}

/// Collect every single-edit candidate of `root`, in generation order
pub fn candidates(root: &str) -> Vec<Candidate> {
    let len = root.chars().count();
    let mut out = Vec::with_capacity(52 * len + 26 + len.saturating_sub(1) + len);
    for_each_candidate(root, |word, operation| {
        out.push(Candidate {
            word: word.to_string(),
            operation,
        });
    });
    out
}

/// Classify the allowed edit that turns `from` into `to`.
///
/// Returns `None` when the words are equal or differ by anything other
/// than exactly one allowed edit.
pub fn single_edit(from: &str, to: &str) -> Option<EditOperation> {
    let a: Vec<char> = from.chars().collect();
    let b: Vec<char> = to.chars().collect();

    if a.len() == b.len() {
        let diffs: Vec<usize> = (0..a.len()).filter(|&i| a[i] != b[i]).collect();
        return match diffs.as_slice() {
            [_] => Some(EditOperation::Substitution),
            [i, j] if *j == i + 1 && a[*i] == b[*j] && a[*j] == b[*i] => Some(EditOperation::Swap),
            _ => None,
        };
    }

    if b.len() == a.len() + 1 && is_one_insertion(&a, &b) {
        return Some(EditOperation::Insertion);
    }

    if a.len() == b.len() + 1 && is_one_insertion(&b, &a) {
        return Some(EditOperation::Deletion);
    }

    None
}

/// True when `longer` is `shorter` with exactly one extra letter
fn is_one_insertion(shorter: &[char], longer: &[char]) -> bool {
    let split = shorter
        .iter()
        .zip(longer)
        .position(|(x, y)| x != y)
        .unwrap_or(shorter.len());
    shorter[split..] == longer[split + 1..]
}
