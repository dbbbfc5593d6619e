//! Command implementations

pub mod explore;
pub mod play;
pub mod score;
pub mod search;

pub use explore::{ExploreResult, run_explore};
pub use play::{PlayConfig, PlayResult, run_play};
pub use score::{filter_words, score_words};
pub use search::{SearchReport, run_search};
