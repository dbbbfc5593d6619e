//! Word representation
//!
//! A Word stores a lowercase ASCII word of any positive length. The game fixes
//! the length per session (4, 5 or 7 letters); the type itself does not.

use rustc_hash::FxHashSet;
use std::fmt;

/// A lowercase ASCII word
///
/// Ordering is lexicographic on the text, which the search frontier relies on
/// for deterministic tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_astar::core::Word;
    ///
    /// let word = Word::new(" Mango ").unwrap();
    /// assert_eq!(word.text(), "mango");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; provided for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars().contains(&letter)
    }

    /// Number of distinct letters in the word
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.chars().iter().collect::<FxHashSet<_>>().len()
    }

    /// Count occurrences of each letter, indexed by `letter - b'a'`
    pub(crate) fn letter_counts(&self) -> [usize; 26] {
        let mut counts = [0usize; 26];
        for &ch in self.chars() {
            counts[usize::from(ch - b'a')] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_letter_counts_past_u8_range() {
        let word = Word::new("z".repeat(256) + "y").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[25], 256);
        assert_eq!(counts[24], 1);
        assert_eq!(counts.iter().sum::<usize>(), 257);
    }

    #[test]
    fn word_creation_valid() {
        let word = Word::new("kiwi").unwrap();
        assert_eq!(word.text(), "kiwi");
        assert_eq!(word.chars(), b"kiwi");
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        assert_eq!(Word::new("MANGO").unwrap().text(), "mango");
        assert_eq!(Word::new("  ApRiCoT\n").unwrap().text(), "apricot");
    }

    #[test]
    fn word_creation_rejects_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("man9o"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ma go"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("mango!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("mangö"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("grape").unwrap();
        assert!(word.has_letter(b'g'));
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_distinct_letters() {
        assert_eq!(Word::new("apple").unwrap().distinct_letters(), 4);
        assert_eq!(Word::new("kiwi").unwrap().distinct_letters(), 3);
        assert_eq!(Word::new("mango").unwrap().distinct_letters(), 5);
        assert_eq!(Word::new("aaaaaaa").unwrap().distinct_letters(), 1);
    }

    #[test]
    fn word_letter_counts() {
        let counts = Word::new("eerie").unwrap().letter_counts();
        assert_eq!(counts[usize::from(b'e' - b'a')], 3);
        assert_eq!(counts[usize::from(b'r' - b'a')], 1);
        assert_eq!(counts[usize::from(b'i' - b'a')], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words: Vec<Word> = ["pear", "kiwi", "lime"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["kiwi", "lime", "pear"]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("melon").unwrap();
        assert_eq!(format!("{word}"), "melon");
    }
}
