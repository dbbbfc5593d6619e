//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use crate::game::Difficulty;
use log::{info, warn};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where word lists come from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordSource {
    /// Lists compiled into the binary
    #[default]
    Embedded,
    /// A directory holding `WORD_LIST1.txt`, `WORD_LIST2.txt` and `WORD_LIST3.txt`
    Directory(PathBuf),
}

/// Error type for word list loading
#[derive(Debug)]
pub enum WordListError {
    Io { path: PathBuf, source: io::Error },
    Empty { word_len: usize },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::Empty { word_len } => {
                write!(f, "No words of length {word_len} found in the word list.")
            }
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

/// Parse one word per line, keeping only valid words of `word_len` letters
///
/// Returns the words and the number of non-blank lines that were skipped.
#[must_use]
pub fn parse_words(content: &str, word_len: usize) -> (Vec<Word>, usize) {
    let mut skipped = 0;
    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) if word.len() == word_len => Some(word),
                _ => {
                    skipped += 1;
                    None
                }
            }
        })
        .collect();

    (words, skipped)
}

/// Load words of `word_len` letters from a file
///
/// Blank lines, lines with non-letters and words of the wrong length are skipped.
///
/// # Errors
///
/// Returns [`WordListError::Io`] if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_astar::wordlists::loader::load_from_file;
///
/// let words = load_from_file("WORD_LIST2.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_len: usize) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (words, skipped) = parse_words(&content, word_len);
    if skipped > 0 {
        warn!(
            "skipped {skipped} line(s) in {} that are not {word_len}-letter words",
            path.display()
        );
    }
    info!("loaded {} words from {}", words.len(), path.display());

    Ok(words)
}

/// Convert embedded string slice to Word vector, keeping words of `word_len` letters
///
/// # Examples
/// ```
/// use wordle_astar::wordlists::loader::words_from_slice;
/// use wordle_astar::wordlists::NORMAL;
///
/// let words = words_from_slice(NORMAL, 5);
/// assert_eq!(words.len(), NORMAL.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_len: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::new(s).ok())
        .filter(|w| w.len() == word_len)
        .collect()
}

/// Load the word list for a difficulty tier
///
/// # Errors
///
/// Returns [`WordListError::Io`] if a list file cannot be read, and
/// [`WordListError::Empty`] if no usable words remain.
pub fn load_words(difficulty: Difficulty, source: &WordSource) -> Result<Vec<Word>, WordListError> {
    let word_len = difficulty.word_len();
    let words = match source {
        WordSource::Embedded => words_from_slice(super::embedded(difficulty), word_len),
        WordSource::Directory(dir) => load_from_file(dir.join(difficulty.file_name()), word_len)?,
    };

    if words.is_empty() {
        return Err(WordListError::Empty { word_len });
    }

    Ok(words)
}
