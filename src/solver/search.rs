//! Best-first word search
//!
//! Explores a word pool from a random starting word, always expanding the
//! node with the lowest priority (distinct-letter count). Every unvisited word
//! in the current node's pool becomes a child, so the search eventually visits
//! every word reachable from the start. The ordering only decides *when* the
//! target is found, never *whether* it is.
//!
//! Two expansion modes exist:
//! - [`Expansion::Filtered`]: children carry the current pool filtered by the
//!   current word's verdict against the target.
//! - [`Expansion::Unfiltered`]: children carry the original pool unchanged.
//!
//! In both modes the children are drawn from the *current* node's pool, not
//! from the filtered one.

use log::{debug, trace};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::rc::Rc;

use super::filter::filter_candidates;
use super::frontier::Frontier;
use super::node::SearchNode;
use crate::core::{Verdict, Word};

/// Pool carried by child nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expansion {
    /// Children carry the current pool narrowed by the current word's verdict
    #[default]
    Filtered,
    /// Children carry the root pool
    Unfiltered,
}

/// Statistics and result of one search run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The target, if it was reached
    pub found: Option<Word>,
    /// Seed word the search started from (`None` for an empty pool)
    pub start: Option<Word>,
    /// Nodes whose children were generated
    pub expanded: usize,
    /// Nodes created, including the root
    pub generated: usize,
    /// Popped nodes skipped because their word was already visited
    pub stale: usize,
    /// Depth of the node that matched the target
    pub depth: Option<u32>,
    /// Largest frontier size observed
    pub peak_frontier: usize,
}

impl SearchOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.found.is_some()
    }
}

/// Best-first search over a word pool
#[derive(Debug, Clone, Copy, Default)]
pub struct PrioritySearch {
    expansion: Expansion,
}

impl PrioritySearch {
    #[must_use]
    pub const fn new(expansion: Expansion) -> Self {
        Self { expansion }
    }

    #[must_use]
    pub const fn expansion(&self) -> Expansion {
        self.expansion
    }

    /// Search for `target`, starting from a word chosen uniformly from `pool`
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_astar::core::Word;
    /// use wordle_astar::solver::{Expansion, PrioritySearch};
    ///
    /// let pool: Vec<Word> = ["apple", "grape", "mango"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let target = Word::new("mango").unwrap();
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let outcome = PrioritySearch::new(Expansion::Unfiltered).run(&pool, &target, &mut rng);
    /// assert_eq!(outcome.found, Some(target));
    /// ```
    pub fn run<R: Rng + ?Sized>(&self, pool: &[Word], target: &Word, rng: &mut R) -> SearchOutcome {
        match pool.choose(rng) {
            Some(start) => self.run_from(pool, target, start),
            None => {
                debug!("empty pool, nothing to search for '{target}'");
                SearchOutcome::default()
            }
        }
    }

    /// Search for `target`, starting from `start`
    ///
    /// `start` does not have to be a member of `pool`.
    #[must_use]
    pub fn run_from(&self, pool: &[Word], target: &Word, start: &Word) -> SearchOutcome {
        let root_pool: Rc<[Word]> = pool.iter().cloned().collect();
        let mut frontier = Frontier::new();
        let mut closed: FxHashSet<Word> = FxHashSet::default();
        let mut outcome = SearchOutcome {
            start: Some(start.clone()),
            ..SearchOutcome::default()
        };

        let root_id = frontier.next_id();
        frontier.push(SearchNode::root(root_id, start.clone(), Rc::clone(&root_pool)));

        while let Some(current) = frontier.pop() {
            trace!(
                "pop #{} '{}' priority={} depth={}",
                current.node_id,
                current.word,
                current.priority(),
                current.depth
            );

            if current.word == *target {
                outcome.found = Some(current.word);
                outcome.depth = Some(current.depth);
                break;
            }

            if !closed.insert(current.word.clone()) {
                outcome.stale += 1;
                continue;
            }

            let Some(child_pool) = self.child_pool(&current, target, &root_pool) else {
                continue;
            };
            outcome.expanded += 1;

            for word in current.possible_words.iter() {
                if closed.contains(word) {
                    continue;
                }
                let id = frontier.next_id();
                frontier.push(SearchNode::child(
                    id,
                    word.clone(),
                    Rc::clone(&child_pool),
                    &current,
                ));
            }
        }

        outcome.generated = frontier.created();
        outcome.peak_frontier = frontier.high_water();

        debug!(
            "search for '{target}' from '{start}' {} after {} expansions ({} nodes, {} stale)",
            if outcome.is_success() { "succeeded" } else { "exhausted" },
            outcome.expanded,
            outcome.generated,
            outcome.stale
        );

        outcome
    }

    /// Pool handed to the children of `current`, or `None` if it gets no children
    fn child_pool(
        &self,
        current: &SearchNode,
        target: &Word,
        root_pool: &Rc<[Word]>,
    ) -> Option<Rc<[Word]>> {
        match self.expansion {
            Expansion::Unfiltered => Some(Rc::clone(root_pool)),
            Expansion::Filtered => {
                let verdict = match Verdict::score(&current.word, target) {
                    Ok(verdict) => verdict,
                    Err(e) => {
                        trace!("no children for '{}': {e}", current.word);
                        return None;
                    }
                };
                let narrowed = filter_candidates(&current.possible_words, &current.word, &verdict);
                if narrowed.is_empty() {
                    None
                } else {
                    Some(narrowed.into())
                }
            }
        }
    }
}

/// Find `target` in `pool` with a filtered search, returning the word found
pub fn search_word<R: Rng + ?Sized>(pool: &[Word], target: &Word, rng: &mut R) -> Option<Word> {
    PrioritySearch::new(Expansion::Filtered)
        .run(pool, target, rng)
        .found
}

/// Check whether `target` is reachable in `pool` with an unfiltered search
pub fn contains_word<R: Rng + ?Sized>(pool: &[Word], target: &Word, rng: &mut R) -> bool {
    PrioritySearch::new(Expansion::Unfiltered)
        .run(pool, target, rng)
        .is_success()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn fruit_pool() -> Vec<Word> {
        words(&[
            "apple", "grape", "peach", "berry", "melon", "mango", "lemon", "guava", "olive",
        ])
    }

    #[test]
    fn finds_every_member_from_every_start() {
        let pool = fruit_pool();
        for expansion in [Expansion::Filtered, Expansion::Unfiltered] {
            let search = PrioritySearch::new(expansion);
            for start in &pool {
                for target in &pool {
                    let outcome = search.run_from(&pool, target, start);
                    assert_eq!(
                        outcome.found.as_ref(),
                        Some(target),
                        "{expansion:?} from {start} missed {target}"
                    );
                }
            }
        }
    }

    #[test]
    fn absent_target_exhausts() {
        let pool = fruit_pool();
        let target = Word::new("kiwis").unwrap();

        for expansion in [Expansion::Filtered, Expansion::Unfiltered] {
            let outcome = PrioritySearch::new(expansion).run_from(&pool, &target, &pool[0]);
            assert!(!outcome.is_success());
            assert_eq!(outcome.depth, None);
        }
    }

    #[test]
    fn unfiltered_absent_target_visits_whole_pool() {
        let pool = fruit_pool();
        let target = Word::new("kiwis").unwrap();
        let outcome = PrioritySearch::new(Expansion::Unfiltered).run_from(&pool, &target, &pool[0]);
        assert_eq!(outcome.expanded, pool.len());
    }

    #[test]
    fn filtered_dead_end_when_verdict_rules_out_everything() {
        // LEMON against an absent target is all black, and MELON shares its
        // letters, so the filtered pool is empty and the root gets no children.
        let pool = words(&["lemon", "melon"]);
        let target = Word::new("zzzzz").unwrap();
        let outcome = PrioritySearch::new(Expansion::Filtered).run_from(&pool, &target, &pool[0]);

        assert!(!outcome.is_success());
        assert_eq!(outcome.expanded, 0);
        assert_eq!(outcome.generated, 1);

        let unfiltered = PrioritySearch::new(Expansion::Unfiltered).run_from(&pool, &target, &pool[0]);
        assert_eq!(unfiltered.expanded, 2);
    }

    #[test]
    fn start_equal_to_target_returns_immediately() {
        let pool = fruit_pool();
        let outcome = PrioritySearch::default().run_from(&pool, &pool[3], &pool[3]);
        assert_eq!(outcome.found.as_ref(), Some(&pool[3]));
        assert_eq!(outcome.depth, Some(0));
        assert_eq!(outcome.expanded, 0);
        assert_eq!(outcome.generated, 1);
    }

    #[test]
    fn lower_priority_words_are_visited_first() {
        // From GRAPE, APPLE (4 distinct letters) is popped and expanded before
        // MANGO (5), even though MANGO was pushed at the same time.
        let pool = words(&["grape", "apple", "mango"]);
        let target = Word::new("mango").unwrap();
        let outcome = PrioritySearch::new(Expansion::Unfiltered).run_from(&pool, &target, &pool[0]);

        assert!(outcome.is_success());
        assert_eq!(outcome.expanded, 2);
        // The older MANGO node (child of GRAPE) wins the tie on creation order
        assert_eq!(outcome.depth, Some(1));
        assert_eq!(outcome.generated, 4);
    }

    #[test]
    fn filtered_children_still_reach_target_in_larger_pool() {
        let pool = fruit_pool();
        let target = Word::new("mango").unwrap();
        let start = Word::new("lemon").unwrap();
        let outcome = PrioritySearch::new(Expansion::Filtered).run_from(&pool, &target, &start);

        assert!(outcome.is_success());
        assert!(outcome.peak_frontier >= 1);
        assert!(outcome.generated > outcome.expanded);
    }

    #[test]
    fn wrong_length_target_fails_without_children_when_filtered() {
        let pool = words(&["kiwi", "plum", "pear"]);
        let target = Word::new("mango").unwrap();
        let outcome = PrioritySearch::new(Expansion::Filtered).run_from(&pool, &target, &pool[0]);

        assert!(!outcome.is_success());
        assert_eq!(outcome.expanded, 0);
        assert_eq!(outcome.generated, 1);
    }

    #[test]
    fn empty_pool_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let target = Word::new("mango").unwrap();
        let outcome = PrioritySearch::default().run(&[], &target, &mut rng);

        assert!(!outcome.is_success());
        assert_eq!(outcome.start, None);
        assert_eq!(outcome.generated, 0);
    }

    #[test]
    fn same_seed_same_outcome() {
        let pool = fruit_pool();
        let target = Word::new("olive").unwrap();
        let search = PrioritySearch::new(Expansion::Filtered);

        let first = search.run(&pool, &target, &mut StdRng::seed_from_u64(42));
        let second = search.run(&pool, &target, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn helper_variants() {
        let pool = fruit_pool();
        let mut rng = StdRng::seed_from_u64(3);

        let mango = Word::new("mango").unwrap();
        assert_eq!(search_word(&pool, &mango, &mut rng), Some(mango.clone()));
        assert!(contains_word(&pool, &mango, &mut rng));

        let cherry = Word::new("cherry").unwrap();
        assert_eq!(search_word(&pool, &cherry, &mut rng), None);
        assert!(!contains_word(&pool, &cherry, &mut rng));
    }
}
