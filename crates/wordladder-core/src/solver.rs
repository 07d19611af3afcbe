//! Word ladder solver
//!
//! Composes the dictionary, the derivation graph builder and the ladder
//! search behind two operations: load a word list, find a ladder.
//!
//! A solver is single-threaded state: each query mutates per-entry search
//! fields, so concurrent queries need external synchronization.

use std::time::Instant;

use crate::config::SolverConfig;
use crate::dictionary::Dictionary;
use crate::graph::{GraphBuilder, GraphStats};
use crate::search::{self, LadderResult};

#[derive(Debug, Clone, Default)]
pub struct WordLadderSolver {
    dictionary: Dictionary,
    config: SolverConfig,
    stats: GraphStats,
}

impl WordLadderSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Normalize and add every word, then build the derivation graph.
    ///
    /// Calling `load` again adds the new words and rebuilds every entry's
    /// derivatives over the full word set.
    #[tracing::instrument(skip(self, words))]
    pub fn load<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let mut tokens = 0usize;
        for word in words {
            tokens += 1;
            self.dictionary.add(word.as_ref());
        }
        crate::trace_time!(start, "fill_dictionary", tokens = tokens);

        self.stats = GraphBuilder::new()
            .with_dedupe_edges(self.config.dedupe_edges)
            .build(&mut self.dictionary);

        tracing::debug!(
            tokens,
            words = self.dictionary.len(),
            edges = self.stats.edges,
            "word list loaded"
        );
    }

    /// Shortest ladder from `start` to `end`
    pub fn find_ladder(&mut self, start: &str, end: &str) -> LadderResult {
        search::find_ladder(&mut self.dictionary, start, end)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Counts from the most recent graph build
    pub fn graph_stats(&self) -> GraphStats {
        self.stats
    }
}
