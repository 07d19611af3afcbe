//! Word store for ladder building
//!
//! The dictionary exclusively owns every [`DictionaryEntry`] in an indexed
//! store; a hash map from normalized [`Word`] to [`EntryId`] provides lookup.
//! Links between entries (derivatives, predecessors) are handles into the
//! same store.

mod entry;
mod word;

pub use entry::{DictionaryEntry, EntryId};
pub use word::{normalize, Word};

use std::collections::HashMap;

/// Normalized words with their derivation edges and search state
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
    index: HashMap<Word, EntryId>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `raw` and insert it if it is non-empty and not yet present.
    ///
    /// Returns the handle of the entry holding the word (new or existing),
    /// or `None` when nothing alphabetic remains after normalization.
    pub fn add(&mut self, raw: &str) -> Option<EntryId> {
        let word = Word::normalize(raw);
        if word.is_empty() {
            return None;
        }

        if let Some(&id) = self.index.get(&word) {
            return Some(id);
        }

        let id = EntryId(self.entries.len());
        self.index.insert(word.clone(), id);
        self.entries.push(DictionaryEntry::new(id, word));
        Some(id)
    }

    /// Normalize `raw` and return its entry, if stored
    pub fn lookup(&self, raw: &str) -> Option<&DictionaryEntry> {
        self.lookup_id(raw).map(|id| self.get(id))
    }

    /// Normalize `raw` and return its handle, if stored
    pub fn lookup_id(&self, raw: &str) -> Option<EntryId> {
        self.find(&normalize(raw))
    }

    /// Exact lookup of an already-normalized word
    pub fn find(&self, word: &str) -> Option<EntryId> {
        self.index.get(word).copied()
    }

    /// Entry behind a handle issued by this dictionary
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different dictionary.
    pub fn get(&self, id: EntryId) -> &DictionaryEntry {
        &self.entries[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: EntryId) -> &mut DictionaryEntry {
        &mut self.entries[id.0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = EntryId> {
        (0..self.entries.len()).map(EntryId)
    }

    /// Total number of derivative links across all entries
    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|e| e.derivatives().len()).sum()
    }

    /// Clear visited flags and predecessors on every entry
    pub fn reset_search_state(&mut self) {
        for entry in &mut self.entries {
            entry.clear_search_state();
        }
    }

    /// True when no entry carries search state
    pub fn is_search_state_clear(&self) -> bool {
        self.entries
            .iter()
            .all(|e| !e.is_visited() && e.predecessor().is_none())
    }
}

#[cfg(test)]
mod tests;
