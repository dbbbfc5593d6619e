//! Feedback verdict calculation and representation
//!
//! A verdict holds one tag per guessed letter:
//! - Green: letter matches the secret at this position
//! - Yellow: letter occurs somewhere else in the secret
//! - Black: letter does not occur in the secret
//!
//! The default [`ScoringRule::Naive`] rule checks plain membership for yellows,
//! so a repeated guess letter can be marked yellow more often than the secret
//! contains it. [`ScoringRule::Wordle`] is the count-aware alternative.

use super::Word;
use std::fmt;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Green,
    Yellow,
    Black,
}

impl Tag {
    /// Single-letter code used in text verdicts
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Black => 'B',
        }
    }

    /// Emoji square for this tag
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Black => '⬛',
        }
    }

    /// Parse a tag from its letter code or emoji square
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            'B' | 'b' | '-' | '_' | '⬛' | '⬜' => Some(Self::Black),
            _ => None,
        }
    }
}

/// How yellows are assigned when scoring a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringRule {
    /// Yellow whenever the letter occurs anywhere in the secret
    #[default]
    Naive,
    /// Yellow only while unclaimed occurrences of the letter remain
    Wordle,
}

/// Error returned when a guess cannot be scored against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    LengthMismatch { guess: usize, secret: usize },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, secret } => write!(
                f,
                "Guess has {guess} letters but the secret has {secret}"
            ),
        }
    }
}

impl std::error::Error for ScoreError {}

/// Per-position feedback for a guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Verdict(Vec<Tag>);

impl Verdict {
    /// Build a verdict from explicit tags
    #[must_use]
    pub const fn new(tags: Vec<Tag>) -> Self {
        Self(tags)
    }

    /// Score `guess` against `secret` with the naive membership rule
    ///
    /// # Errors
    /// Returns [`ScoreError::LengthMismatch`] if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_astar::core::{Verdict, Word};
    ///
    /// let guess = Word::new("grape").unwrap();
    /// let secret = Word::new("mango").unwrap();
    /// let verdict = Verdict::score(&guess, &secret).unwrap();
    /// assert_eq!(verdict.to_string(), "YBYBB");
    /// ```
    pub fn score(guess: &Word, secret: &Word) -> Result<Self, ScoreError> {
        Self::score_with(ScoringRule::Naive, guess, secret)
    }

    /// Score `guess` against `secret` with the given rule
    ///
    /// # Errors
    /// Returns [`ScoreError::LengthMismatch`] if the words differ in length.
    pub fn score_with(rule: ScoringRule, guess: &Word, secret: &Word) -> Result<Self, ScoreError> {
        if guess.len() != secret.len() {
            return Err(ScoreError::LengthMismatch {
                guess: guess.len(),
                secret: secret.len(),
            });
        }

        Ok(match rule {
            ScoringRule::Naive => Self::score_naive(guess, secret),
            ScoringRule::Wordle => Self::score_counted(guess, secret),
        })
    }

    fn score_naive(guess: &Word, secret: &Word) -> Self {
        let tags = guess
            .chars()
            .iter()
            .zip(secret.chars())
            .map(|(&g, &s)| {
                if g == s {
                    Tag::Green
                } else if secret.has_letter(g) {
                    Tag::Yellow
                } else {
                    Tag::Black
                }
            })
            .collect();
        Self(tags)
    }

    /// Greens first, then yellows from whatever letters the greens left unclaimed
    fn score_counted(guess: &Word, secret: &Word) -> Self {
        let mut tags = vec![Tag::Black; guess.len()];
        let mut available = secret.letter_counts();

        for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            if g == s {
                tags[i] = Tag::Green;
                available[usize::from(g - b'a')] -= 1;
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if tags[i] == Tag::Green {
                continue;
            }
            let slot = &mut available[usize::from(g - b'a')];
            if *slot > 0 {
                tags[i] = Tag::Yellow;
                *slot -= 1;
            }
        }

        Self(tags)
    }

    /// The tags in guess order
    #[inline]
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every tag is green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&t| t == Tag::Green)
    }

    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.0.iter().filter(|&&t| t == Tag::Green).count()
    }

    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.0.iter().filter(|&&t| t == Tag::Yellow).count()
    }

    /// Convert verdict to an emoji string like "🟩🟨⬛"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|t| t.emoji()).collect()
    }

    /// Parse a verdict from a string like "GYB" or "🟩🟨⬛"
    ///
    /// # Examples
    /// ```
    /// use wordle_astar::core::Verdict;
    ///
    /// let v1 = Verdict::parse("GY-B").unwrap();
    /// let v2 = Verdict::parse("🟩🟨⬛⬛").unwrap();
    /// assert_eq!(v1, v2);
    /// assert!(Verdict::parse("GXB").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let tags: Option<Vec<Tag>> = s.trim().chars().map(Tag::from_char).collect();
        tags.filter(|t| !t.is_empty()).map(Self)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.0 {
            write!(f, "{}", tag.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid verdict string: {s}"))
    }
}
