use std::collections::HashSet;
use std::time::Instant;

use serde::Serialize;

use crate::dictionary::{Dictionary, EntryId};

use super::edit::for_each_candidate;

/// Counts gathered while building the derivation graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Entries processed
    pub words: usize,
    /// Derivative links stored
    pub edges: usize,
    /// Repeated root -> target pairs seen during generation
    pub duplicate_edges: usize,
}

/// Computes the derivative list of every dictionary entry
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder {
    dedupe_edges: bool,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self { dedupe_edges: true }
    }
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the first link to each target (position is preserved)
    pub fn with_dedupe_edges(mut self, dedupe_edges: bool) -> Self {
        self.dedupe_edges = dedupe_edges;
        self
    }

    /// Replace the derivative list of every entry.
    ///
    /// Words added to the dictionary afterwards are not linked until the
    /// graph is built again.
    #[tracing::instrument(skip(self, dictionary), fields(words = dictionary.len(), dedupe = self.dedupe_edges))]
    pub fn build(&self, dictionary: &mut Dictionary) -> GraphStats {
        let start = Instant::now();
        let mut stats = GraphStats {
            words: dictionary.len(),
            ..GraphStats::default()
        };

        let ids: Vec<EntryId> = dictionary.ids().collect();
        for id in ids {
            let derivatives = self.derive(dictionary, id, &mut stats.duplicate_edges);
            stats.edges += derivatives.len();
            dictionary.get_mut(id).set_derivatives(derivatives);
        }

        crate::trace_time!(start, "build_graph", edges = stats.edges);
        tracing::debug!(
            words = stats.words,
            edges = stats.edges,
            duplicate_edges = stats.duplicate_edges,
            "derivation graph built"
        );
        stats
    }

    fn derive(&self, dictionary: &Dictionary, root: EntryId, duplicates: &mut usize) -> Vec<EntryId> {
        let word = dictionary.get(root).word().as_str();
        let mut derivatives = Vec::new();
        let mut seen: HashSet<EntryId> = HashSet::new();

        for_each_candidate(word, |candidate, _operation| {
            let Some(target) = dictionary.find(candidate) else {
                return;
            };
            if target == root {
                return;
            }
            if !seen.insert(target) {
                *duplicates += 1;
                if self.dedupe_edges {
                    return;
                }
            }
            derivatives.push(target);
        });

        derivatives
    }
}
