//! Derivation graph construction
//!
//! Every dictionary word is linked to each other dictionary word reachable by
//! one allowed edit:
//! - `edit`: the edit operations, candidate generation and pair classification
//! - `builder`: the one-shot pass that fills each entry's derivative list

pub mod builder;
pub mod edit;

pub use builder::{GraphBuilder, GraphStats};
pub use edit::{candidates, for_each_candidate, single_edit, Candidate, EditOperation};
