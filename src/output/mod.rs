//! Terminal output formatting
//!
//! Display utilities for CLI results and colored feedback.

pub mod display;
pub mod formatters;

pub use display::{print_explore_result, print_filter_result, print_score, print_search_report};
