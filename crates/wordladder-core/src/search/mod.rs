//! Shortest ladder search over the derivation graph
//!
//! Breadth-first search from the start entry, using the per-entry visited
//! flag and predecessor link. The whole dictionary's search state is cleared
//! when the query finishes, whatever its outcome.

mod path;

use std::collections::VecDeque;
use std::fmt;
use std::time::Instant;

use serde::Serialize;

use crate::dictionary::{Dictionary, EntryId, Word};
use crate::graph::{single_edit, EditOperation};

/// Outcome of a ladder query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LadderStatus {
    /// A shortest ladder was found
    Success,
    /// The start word is not in the dictionary
    StartNotFound,
    /// The end word is not in the dictionary
    EndNotFound,
    /// Start and end normalize to the same word
    SameWord,
    /// Both words exist but no chain of edits connects them
    NoLadder,
}

impl LadderStatus {
    /// Numeric status code: 0, 1, 2, 3 and -1 respectively
    pub fn code(&self) -> i32 {
        match self {
            LadderStatus::Success => 0,
            LadderStatus::StartNotFound => 1,
            LadderStatus::EndNotFound => 2,
            LadderStatus::SameWord => 3,
            LadderStatus::NoLadder => -1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LadderStatus::Success => "success",
            LadderStatus::StartNotFound => "start_not_found",
            LadderStatus::EndNotFound => "end_not_found",
            LadderStatus::SameWord => "same_word",
            LadderStatus::NoLadder => "no_ladder",
        }
    }
}

impl fmt::Display for LadderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rung transition of a ladder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LadderStep {
    pub from: Word,
    pub to: Word,
    pub operation: EditOperation,
}

/// Result of a ladder query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LadderResult {
    /// Normalized start word
    pub start: Word,
    /// Normalized end word
    pub end: Word,
    pub status: LadderStatus,
    /// Words from start to end inclusive; empty unless `status` is `Success`
    pub words: Vec<Word>,
}

impl LadderResult {
    fn without_path(start: Word, end: Word, status: LadderStatus) -> Self {
        Self {
            start,
            end,
            status,
            words: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == LadderStatus::Success
    }

    /// Number of edits in the ladder (0 when none was found)
    pub fn edge_count(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    /// The edit applied at each consecutive pair of the ladder
    pub fn steps(&self) -> Vec<LadderStep> {
        self.words
            .windows(2)
            .filter_map(|pair| {
                single_edit(pair[0].as_str(), pair[1].as_str()).map(|operation| LadderStep {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                    operation,
                })
            })
            .collect()
    }
}

/// Find the shortest ladder from `start` to `end`.
///
/// Checks run in order: same word, start missing, end missing, then BFS.
/// The dictionary's graph must already be built. Between equally short
/// ladders the one found first in derivative-list order wins, so repeated
/// queries on the same dictionary return the same ladder.
#[tracing::instrument(skip(dictionary), fields(words = dictionary.len()))]
pub fn find_ladder(dictionary: &mut Dictionary, start: &str, end: &str) -> LadderResult {
    let start_word = Word::normalize(start);
    let end_word = Word::normalize(end);

    if start_word == end_word {
        return LadderResult::without_path(start_word, end_word, LadderStatus::SameWord);
    }

    let Some(start_id) = dictionary.find(start_word.as_str()) else {
        tracing::debug!(start = %start_word, "start word not in dictionary");
        return LadderResult::without_path(start_word, end_word, LadderStatus::StartNotFound);
    };

    let Some(end_id) = dictionary.find(end_word.as_str()) else {
        tracing::debug!(end = %end_word, "end word not in dictionary");
        return LadderResult::without_path(start_word, end_word, LadderStatus::EndNotFound);
    };

    dictionary.reset_search_state();

    let started = Instant::now();
    let found = breadth_first(dictionary, start_id, end_id);
    let words = if found {
        path::reconstruct_path(dictionary, end_id)
    } else {
        Vec::new()
    };
    dictionary.reset_search_state();

    let status = if words.is_empty() {
        LadderStatus::NoLadder
    } else {
        LadderStatus::Success
    };

    crate::trace_time!(started, "bfs", rungs = words.len());
    tracing::debug!(status = %status, rungs = words.len(), "ladder search finished");

    LadderResult {
        start: start_word,
        end: end_word,
        status,
        words,
    }
}

/// Run BFS until `end` is dequeued or the queue drains. Leaves visited
/// flags and predecessors set for path reconstruction.
fn breadth_first(dictionary: &mut Dictionary, start: EntryId, end: EntryId) -> bool {
    let mut queue: VecDeque<EntryId> = VecDeque::new();

    dictionary.get_mut(start).mark_visited(None);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            return true;
        }

        let derivatives = dictionary.get(current).derivatives().to_vec();
        for next in derivatives {
            let entry = dictionary.get_mut(next);
            if entry.is_visited() {
                continue;
            }
            entry.mark_visited(Some(current));
            queue.push_back(next);
        }
    }

    false
}
