//! Wordle A*
//!
//! A terminal Wordle clone with colorized feedback, plus a best-first search
//! that explores a word pool ordered by distinct-letter count.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_astar::core::{Verdict, Word};
//!
//! let guess = Word::new("apple").unwrap();
//! let secret = Word::new("mango").unwrap();
//!
//! let verdict = Verdict::score(&guess, &secret).unwrap();
//! assert_eq!(verdict.to_string(), "YBBBB");
//! ```

// Core domain types
pub mod core;

// Candidate filtering and priority search
pub mod solver;

// Game rules and sessions
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
