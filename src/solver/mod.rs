//! Candidate filtering and best-first word search

pub mod filter;
pub mod frontier;
pub mod node;
pub mod search;

pub use filter::{filter_candidates, is_consistent};
pub use node::{FrontierKey, SearchNode, distinct_letter_heuristic};
pub use search::{Expansion, PrioritySearch, SearchOutcome, contains_word, search_word};
