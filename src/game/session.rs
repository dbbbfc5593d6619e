//! Game session state
//!
//! Tracks the secret word, the attempt budget and the feedback history. The
//! session does no I/O; the console loop in `commands::play` drives it.

use crate::core::{ScoreError, ScoringRule, Verdict, Word, WordError};
use crate::solver::contains_word;
use log::debug;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Number of attempts allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// What happens to the attempt budget when a guess is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidGuessPolicy {
    /// The rejected guess uses up the attempt
    #[default]
    Forfeit,
    /// The player is asked again for the same attempt
    Retry,
}

/// Per-game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    pub scoring: ScoringRule,
    pub invalid_guess: InvalidGuessPolicy,
    /// Reject guesses that a priority search cannot find in the word list
    pub check_dictionary: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            scoring: ScoringRule::Naive,
            invalid_guess: InvalidGuessPolicy::Forfeit,
            check_dictionary: false,
        }
    }
}

/// Why a guess was not scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    WrongLength { expected: usize, got: usize },
    InvalidWord(WordError),
    NotInWordList,
    GameOver,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, .. } => {
                write!(f, "Your guess must be {expected} letters long.")
            }
            Self::InvalidWord(e) => write!(f, "{e}. Please try again."),
            Self::NotInWordList => {
                write!(f, "The guessed word is not in the word list. Please try again.")
            }
            Self::GameOver => write!(f, "The game is already over."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { attempts: usize },
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of submitting one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Scored {
        guess: Word,
        verdict: Verdict,
        status: GameStatus,
    },
    Rejected {
        rejection: Rejection,
        attempt_consumed: bool,
        status: GameStatus,
    },
}

impl GuessOutcome {
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        match self {
            Self::Scored { status, .. } | Self::Rejected { status, .. } => *status,
        }
    }
}

/// A single game against a secret word
#[derive(Debug)]
pub struct Game<'a> {
    secret: Word,
    words: &'a [Word],
    config: GameConfig,
    attempts_used: usize,
    history: Vec<(Word, Verdict)>,
    status: GameStatus,
}

impl<'a> Game<'a> {
    /// Start a game against `secret`; `words` backs the dictionary check
    #[must_use]
    pub const fn new(secret: Word, words: &'a [Word], config: GameConfig) -> Self {
        Self {
            secret,
            words,
            config,
            attempts_used: 0,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Start a game against a secret drawn uniformly from `words`
    ///
    /// Returns `None` if `words` is empty.
    pub fn random<R: Rng + ?Sized>(words: &'a [Word], config: GameConfig, rng: &mut R) -> Option<Self> {
        let secret = words.choose(rng)?.clone();
        Some(Self::new(secret, words, config))
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    /// 1-based number of the attempt the next guess will use
    #[must_use]
    pub const fn attempt_number(&self) -> usize {
        self.attempts_used + 1
    }

    /// Scored guesses so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Verdict)] {
        &self.history
    }

    /// Submit a raw guess as typed by the player
    ///
    /// Input is trimmed and lowercased. With the dictionary check enabled, the
    /// word list lookup runs before the length check.
    pub fn submit<R: Rng + ?Sized>(&mut self, raw: &str, rng: &mut R) -> GuessOutcome {
        if self.status.is_over() {
            return GuessOutcome::Rejected {
                rejection: Rejection::GameOver,
                attempt_consumed: false,
                status: self.status,
            };
        }

        let (guess, verdict) = match self.evaluate(raw, rng) {
            Ok(scored) => scored,
            Err(rejection) => return self.reject(rejection),
        };

        self.attempts_used += 1;
        self.history.push((guess.clone(), verdict.clone()));

        if verdict.is_solved() {
            self.status = GameStatus::Won {
                attempts: self.attempts_used,
            };
        } else if self.attempts_used >= self.config.max_attempts {
            self.status = GameStatus::Lost;
        }

        debug!(
            "attempt {} '{guess}' -> {verdict} ({:?})",
            self.attempts_used, self.status
        );

        GuessOutcome::Scored {
            guess,
            verdict,
            status: self.status,
        }
    }

    fn evaluate<R: Rng + ?Sized>(&self, raw: &str, rng: &mut R) -> Result<(Word, Verdict), Rejection> {
        let parsed = Word::new(raw);

        if self.config.check_dictionary {
            match &parsed {
                Ok(word) if contains_word(self.words, word, rng) => {}
                _ => return Err(Rejection::NotInWordList),
            }
        }

        let guess = match parsed {
            Ok(word) => word,
            Err(WordError::Empty) => {
                return Err(Rejection::WrongLength {
                    expected: self.secret.len(),
                    got: 0,
                });
            }
            Err(e) => return Err(Rejection::InvalidWord(e)),
        };

        let verdict = Verdict::score_with(self.config.scoring, &guess, &self.secret).map_err(
            |ScoreError::LengthMismatch { guess, secret }| Rejection::WrongLength {
                expected: secret,
                got: guess,
            },
        )?;

        Ok((guess, verdict))
    }

    fn reject(&mut self, rejection: Rejection) -> GuessOutcome {
        let attempt_consumed = self.config.invalid_guess == InvalidGuessPolicy::Forfeit;
        if attempt_consumed {
            self.attempts_used += 1;
            if self.attempts_used >= self.config.max_attempts {
                self.status = GameStatus::Lost;
            }
        }

        debug!("rejected guess: {rejection} (attempt consumed: {attempt_consumed})");

        GuessOutcome::Rejected {
            rejection,
            attempt_consumed,
            status: self.status,
        }
    }
}
