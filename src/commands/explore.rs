//! Explore command
//!
//! Runs the priority search once for every word of a list and aggregates how
//! much work each search needed.

use crate::core::Word;
use crate::solver::{Expansion, PrioritySearch, SearchOutcome};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Aggregated statistics over all explored targets
#[derive(Debug, Clone)]
pub struct ExploreResult {
    pub expansion: Expansion,
    pub total_words: usize,
    pub found: usize,
    /// Targets the search did not reach
    pub missed: Vec<Word>,
    pub average_expanded: f64,
    pub max_expanded: usize,
    pub average_generated: f64,
    /// Depth of the matching node -> number of targets
    pub depth_distribution: BTreeMap<u32, usize>,
    pub duration: Duration,
    pub searches_per_second: f64,
}

/// Search for each of the first `limit` words of `words` within `words`
///
/// Each search gets its own RNG seeded from `seed` and the target's index,
/// so results are reproducible when a seed is given.
#[must_use]
pub fn run_explore(
    words: &[Word],
    expansion: Expansion,
    limit: Option<usize>,
    seed: Option<u64>,
    show_progress: bool,
) -> ExploreResult {
    let targets = &words[..limit.unwrap_or(words.len()).min(words.len())];
    let base_seed = seed.unwrap_or_else(|| rand::rng().random());
    let search = PrioritySearch::new(expansion);

    info!(
        "exploring {} targets over {} words ({expansion:?}, seed {base_seed})",
        targets.len(),
        words.len()
    );

    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Vec<SearchOutcome> = targets
        .par_iter()
        .enumerate()
        .map(|(idx, target)| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(idx as u64));
            let outcome = search.run(words, target, &mut rng);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    summarize(expansion, targets, &outcomes, duration)
}

fn summarize(
    expansion: Expansion,
    targets: &[Word],
    outcomes: &[SearchOutcome],
    duration: Duration,
) -> ExploreResult {
    let total_words = targets.len();
    let mut depth_distribution = BTreeMap::new();
    let mut missed = Vec::new();
    let mut total_expanded = 0;
    let mut total_generated = 0;
    let mut max_expanded = 0;

    for (target, outcome) in targets.iter().zip(outcomes) {
        total_expanded += outcome.expanded;
        total_generated += outcome.generated;
        max_expanded = max_expanded.max(outcome.expanded);

        match outcome.depth {
            Some(depth) if outcome.is_success() => {
                *depth_distribution.entry(depth).or_insert(0) += 1;
            }
            _ => missed.push(target.clone()),
        }
    }

    let average = |total: usize| {
        if total_words == 0 {
            0.0
        } else {
            total as f64 / total_words as f64
        }
    };

    ExploreResult {
        expansion,
        total_words,
        found: total_words - missed.len(),
        missed,
        average_expanded: average(total_expanded),
        max_expanded,
        average_generated: average(total_generated),
        depth_distribution,
        duration,
        searches_per_second: if duration.as_secs_f64() > 0.0 {
            total_words as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}
