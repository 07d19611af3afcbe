//! Dictionary entries and their handles

use std::fmt;

use super::Word;

/// Handle to an entry owned by a [`super::Dictionary`].
///
/// Derivative and predecessor links are stored as handles, never as owners.
/// A handle is only meaningful for the dictionary that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub(crate) usize);

impl EntryId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One stored word with its outgoing edges and per-query search state
#[derive(Debug, Clone)]
pub struct DictionaryEntry {
    id: EntryId,
    word: Word,
    derivatives: Vec<EntryId>,
    visited: bool,
    predecessor: Option<EntryId>,
}

impl DictionaryEntry {
    pub(crate) fn new(id: EntryId, word: Word) -> Self {
        Self {
            id,
            word,
            derivatives: Vec::new(),
            visited: false,
            predecessor: None,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Entries reachable from this one by exactly one allowed edit
    pub fn derivatives(&self) -> &[EntryId] {
        &self.derivatives
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Entry this one was first reached from during the current search
    pub fn predecessor(&self) -> Option<EntryId> {
        self.predecessor
    }

    pub(crate) fn set_derivatives(&mut self, derivatives: Vec<EntryId>) {
        self.derivatives = derivatives;
    }

    pub(crate) fn mark_visited(&mut self, predecessor: Option<EntryId>) {
        self.visited = true;
        self.predecessor = predecessor;
    }

    pub(crate) fn clear_search_state(&mut self) {
        self.visited = false;
        self.predecessor = None;
    }
}
