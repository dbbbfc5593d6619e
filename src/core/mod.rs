//! Core domain types for the game
//!
//! Words and feedback verdicts. Everything here is pure and independent of I/O.

mod verdict;
mod word;

pub use verdict::{ScoreError, ScoringRule, Tag, Verdict};
pub use word::{Word, WordError};
