//! CLI commands for wordladder

pub mod dispatch;
pub mod interactive;
pub mod ladder;
pub mod stats;
