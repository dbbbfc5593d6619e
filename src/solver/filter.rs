//! Candidate filtering
//!
//! Narrows a word pool to the words consistent with one guess and its verdict.

use crate::core::{Tag, Verdict, Word};

/// Check whether `candidate` could have produced `verdict` for `guess`
///
/// Each position is checked independently:
/// - Green: the candidate has the guessed letter at this position
/// - Yellow: the candidate contains the letter, but not at this position
/// - Black: the candidate does not contain the letter at all
///
/// Candidates of a different length never match.
#[must_use]
pub fn is_consistent(candidate: &Word, guess: &Word, verdict: &Verdict) -> bool {
    if candidate.len() != guess.len() || verdict.len() != guess.len() {
        return false;
    }

    guess
        .chars()
        .iter()
        .zip(candidate.chars())
        .zip(verdict.tags())
        .all(|((&g, &c), tag)| match tag {
            Tag::Green => c == g,
            Tag::Yellow => candidate.has_letter(g) && c != g,
            Tag::Black => !candidate.has_letter(g),
        })
}

/// Filter a pool to the words consistent with `guess` and `verdict`
///
/// Returns a fresh pool; the input is left untouched and its order is kept.
///
/// # Examples
/// ```
/// use wordle_astar::core::{Verdict, Word};
/// use wordle_astar::solver::filter_candidates;
///
/// let pool: Vec<Word> = ["mango", "melon", "lemon", "grape"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guess = Word::new("lemon").unwrap();
/// let verdict = Verdict::parse("YGYGG").unwrap();
///
/// let remaining = filter_candidates(&pool, &guess, &verdict);
/// assert_eq!(remaining, vec![Word::new("melon").unwrap()]);
/// ```
#[must_use]
pub fn filter_candidates(pool: &[Word], guess: &Word, verdict: &Verdict) -> Vec<Word> {
    pool.iter()
        .filter(|candidate| is_consistent(candidate, guess, verdict))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn fruit_pool() -> Vec<Word> {
        words(&[
            "apple", "grape", "peach", "berry", "melon", "mango", "lemon",
        ])
    }

    #[test]
    fn filter_keeps_secret_for_its_own_verdict() {
        let pool = fruit_pool();
        let secret = Word::new("mango").unwrap();

        for guess in &pool {
            let verdict = Verdict::score(guess, &secret).unwrap();
            let remaining = filter_candidates(&pool, guess, &verdict);
            assert!(remaining.contains(&secret), "lost mango after {guess}");
        }
    }

    #[test]
    fn filter_green_requires_position() {
        let pool = fruit_pool();
        let guess = Word::new("lemon").unwrap();
        let verdict = Verdict::parse("BGBBB").unwrap();
        // E at position 1, and none of L, M, O, N anywhere
        assert_eq!(
            filter_candidates(&pool, &guess, &verdict),
            words(&["peach", "berry"])
        );
    }

    #[test]
    fn filter_yellow_excludes_same_position() {
        let pool = words(&["plum", "lump", "pulp"]);
        let guess = Word::new("plum").unwrap();
        let verdict = Verdict::parse("YYYY").unwrap();
        // Every letter present but misplaced: only LUMP qualifies
        assert_eq!(filter_candidates(&pool, &guess, &verdict), words(&["lump"]));
    }

    #[test]
    fn filter_black_excludes_letter_everywhere() {
        let pool = words(&["kiwi", "lime", "pear", "plum"]);
        let guess = Word::new("iiii").unwrap();
        let verdict = Verdict::parse("BBBB").unwrap();
        assert_eq!(filter_candidates(&pool, &guess, &verdict), words(&["pear", "plum"]));
    }

    #[test]
    fn filter_naive_duplicate_gap_propagates() {
        // The naive verdict for EERIE against REEDY marks the last E yellow,
        // which demands an E somewhere other than position 4. REEDY still fits.
        let pool = words(&["reedy", "eerie", "greed"]);
        let guess = Word::new("eerie").unwrap();
        let secret = Word::new("reedy").unwrap();
        let verdict = Verdict::score(&guess, &secret).unwrap();

        let remaining = filter_candidates(&pool, &guess, &verdict);
        assert!(remaining.contains(&secret));
        assert!(!remaining.contains(&guess));
    }

    #[test]
    fn filter_rejects_mismatched_lengths() {
        let pool = words(&["kiwi", "mango", "apricot"]);
        let guess = Word::new("mango").unwrap();
        let verdict = Verdict::parse("GGGGG").unwrap();
        assert_eq!(filter_candidates(&pool, &guess, &verdict), words(&["mango"]));

        let short_verdict = Verdict::parse("GGGG").unwrap();
        assert!(filter_candidates(&pool, &guess, &short_verdict).is_empty());
    }

    #[test]
    fn filter_empty_pool() {
        let guess = Word::new("mango").unwrap();
        let verdict = Verdict::parse("BBBBB").unwrap();
        assert!(filter_candidates(&[], &guess, &verdict).is_empty());
    }

    fn word_strategy() -> impl Strategy<Value = Word> {
        "[a-f]{4}".prop_map(|s| Word::new(s).unwrap())
    }

    proptest! {
        #[test]
        fn filter_never_grows_pool(
            pool in prop::collection::vec(word_strategy(), 0..30),
            guess in word_strategy(),
            secret in word_strategy(),
        ) {
            let verdict = Verdict::score(&guess, &secret).unwrap();
            let remaining = filter_candidates(&pool, &guess, &verdict);
            prop_assert!(remaining.len() <= pool.len());
            prop_assert!(remaining.iter().all(|w| pool.contains(w)));
        }

        #[test]
        fn filter_is_idempotent(
            pool in prop::collection::vec(word_strategy(), 0..30),
            guess in word_strategy(),
            secret in word_strategy(),
        ) {
            let verdict = Verdict::score(&guess, &secret).unwrap();
            let once = filter_candidates(&pool, &guess, &verdict);
            let twice = filter_candidates(&once, &guess, &verdict);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn filter_keeps_the_secret(
            pool in prop::collection::vec(word_strategy(), 0..30),
            guess in word_strategy(),
            secret in word_strategy(),
        ) {
            let mut pool = pool;
            pool.push(secret.clone());
            let verdict = Verdict::score(&guess, &secret).unwrap();
            prop_assert!(filter_candidates(&pool, &guess, &verdict).contains(&secret));
        }
    }
}
