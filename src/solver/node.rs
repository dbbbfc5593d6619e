//! Search nodes and their frontier ordering key.

use crate::core::Word;
use std::rc::Rc;

/// Heuristic score for a word: the number of distinct letters it contains.
///
/// The candidate pool is accepted but not consulted.
#[must_use]
pub fn distinct_letter_heuristic(word: &Word, _possible_words: &[Word]) -> u32 {
    word.distinct_letters() as u32
}

/// A node in the priority search tree.
///
/// `cost` is always zero, so `priority` equals the heuristic.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Monotonic identifier assigned at creation, also used for tie-breaking.
    pub node_id: usize,
    /// Parent node ID (`None` for the root). Kept for lineage only.
    pub parent_id: Option<usize>,
    /// Tree depth (root = 0).
    pub depth: u32,
    pub word: Word,
    /// Candidate pool carried by this node; shared between siblings.
    pub possible_words: Rc<[Word]>,
    pub cost: u32,
    pub heuristic: u32,
}

impl SearchNode {
    /// Create a root node (no parent).
    #[must_use]
    pub fn root(node_id: usize, word: Word, possible_words: Rc<[Word]>) -> Self {
        let heuristic = distinct_letter_heuristic(&word, &possible_words);
        Self {
            node_id,
            parent_id: None,
            depth: 0,
            word,
            possible_words,
            cost: 0,
            heuristic,
        }
    }

    /// Create a child of `parent`.
    #[must_use]
    pub fn child(
        node_id: usize,
        word: Word,
        possible_words: Rc<[Word]>,
        parent: &SearchNode,
    ) -> Self {
        let heuristic = distinct_letter_heuristic(&word, &possible_words);
        Self {
            node_id,
            parent_id: Some(parent.node_id),
            depth: parent.depth + 1,
            word,
            possible_words,
            cost: 0,
            heuristic,
        }
    }

    /// `cost + heuristic`, the primary ordering component.
    #[must_use]
    pub const fn priority(&self) -> u32 {
        self.cost + self.heuristic
    }
}

/// Frontier ordering key: `(priority, word, node_id)`, all ascending.
///
/// Equal priorities fall back to the word lexicographically, then to creation
/// order, so extraction order is fully deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub priority: u32,
    pub word: Word,
    pub node_id: usize,
}

impl From<&SearchNode> for FrontierKey {
    fn from(node: &SearchNode) -> Self {
        Self {
            priority: node.priority(),
            word: node.word.clone(),
            node_id: node.node_id,
        }
    }
}
