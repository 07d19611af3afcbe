//! Path reconstruction from BFS predecessor links

use crate::dictionary::{Dictionary, EntryId, Word};

/// Follow predecessor links back from `end`, then reverse into start-to-end
/// order.
pub fn reconstruct_path(dictionary: &Dictionary, end: EntryId) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current = Some(end);

    while let Some(id) = current {
        let entry = dictionary.get(id);
        words.push(entry.word().clone());
        current = entry.predecessor();
    }

    words.reverse();
    words
}
