//! Single priority search command

use crate::core::Word;
use crate::solver::{Expansion, PrioritySearch, SearchOutcome};
use anyhow::{Context, Result};
use rand::Rng;
use std::time::{Duration, Instant};

/// Result of searching for one target
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub target: Word,
    pub expansion: Expansion,
    pub pool_size: usize,
    pub outcome: SearchOutcome,
    pub duration: Duration,
}

/// Search `words` for `target`, from `start` or from a random word
///
/// # Errors
///
/// Returns an error if `target` or `start` is not a valid word.
pub fn run_search<R: Rng + ?Sized>(
    words: &[Word],
    target: &str,
    start: Option<&str>,
    expansion: Expansion,
    rng: &mut R,
) -> Result<SearchReport> {
    let target = Word::new(target).with_context(|| format!("Invalid target word '{target}'"))?;
    let search = PrioritySearch::new(expansion);

    let started = Instant::now();
    let outcome = match start {
        Some(text) => {
            let start = Word::new(text).with_context(|| format!("Invalid start word '{text}'"))?;
            search.run_from(words, &target, &start)
        }
        None => search.run(words, &target, rng),
    };

    Ok(SearchReport {
        target,
        expansion: search.expansion(),
        pool_size: words.len(),
        outcome,
        duration: started.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::EASY;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn search_embedded_easy_list() {
        let words = words_from_slice(EASY, 4);
        let mut rng = StdRng::seed_from_u64(5);

        let report = run_search(&words, "kiwi", None, Expansion::Filtered, &mut rng).unwrap();
        assert_eq!(report.pool_size, words.len());
        assert_eq!(report.outcome.found, Some(Word::new("kiwi").unwrap()));
    }

    #[test]
    fn search_with_fixed_start() {
        let words = words_from_slice(EASY, 4);
        let mut rng = StdRng::seed_from_u64(5);

        let report =
            run_search(&words, "plum", Some("plum"), Expansion::Unfiltered, &mut rng).unwrap();
        assert_eq!(report.outcome.depth, Some(0));
        assert_eq!(report.outcome.start, Some(Word::new("plum").unwrap()));
        assert_eq!(report.expansion, Expansion::Unfiltered);
    }

    #[test]
    fn search_for_absent_word_fails() {
        let words = words_from_slice(EASY, 4);
        let mut rng = StdRng::seed_from_u64(5);

        let report = run_search(&words, "zzzz", None, Expansion::Unfiltered, &mut rng).unwrap();
        assert!(!report.outcome.is_success());
    }

    #[test]
    fn invalid_target_is_an_error() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(run_search(&[], "k1wi", None, Expansion::Filtered, &mut rng).is_err());
    }
}
