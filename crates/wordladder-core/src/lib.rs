//! Wordladder Core Library
//!
//! Builds the shortest chain of dictionary words between two words, where
//! each step substitutes, inserts, deletes or swaps adjacent letters.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod graph;
pub mod logging;
pub mod search;
pub mod solver;
pub mod wordlist;

pub use search::{LadderResult, LadderStatus};
pub use solver::WordLadderSolver;
