//! Difficulty tiers

use clap::ValueEnum;
use std::fmt;

/// Difficulty tier, which fixes the word length for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Difficulty {
    /// 4-letter words
    Easy,
    /// 5-letter words
    #[default]
    Normal,
    /// 7-letter words
    Hard,
}

impl Difficulty {
    /// Parse a numbered menu choice ("1", "2" or "3")
    ///
    /// Returns `None` for anything else; callers fall back to the default tier.
    #[must_use]
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Easy),
            "2" => Some(Self::Normal),
            "3" => Some(Self::Hard),
            _ => None,
        }
    }

    #[must_use]
    pub const fn word_len(self) -> usize {
        match self {
            Self::Easy => 4,
            Self::Normal => 5,
            Self::Hard => 7,
        }
    }

    /// Name of the word list file for this tier
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Easy => "WORD_LIST1.txt",
            Self::Normal => "WORD_LIST2.txt",
            Self::Hard => "WORD_LIST3.txt",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-letter words)", self.label(), self.word_len())
    }
}
