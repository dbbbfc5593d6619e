//! Interactive game loop
//!
//! Console front end for a single game. Input and output are passed in so the
//! loop can be driven from tests as well as from stdin/stdout.

use crate::core::Word;
use crate::game::{Difficulty, Game, GameConfig, GameStatus, GuessOutcome};
use crate::output::formatters::feedback_line;
use crate::wordlists::{WordListError, WordSource, load_words};
use anyhow::{Context, Result, bail};
use log::info;
use rand::Rng;
use std::io::{BufRead, Write};

/// Settings for one interactive game
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    /// Skip the menu and play this tier
    pub difficulty: Option<Difficulty>,
    pub source: WordSource,
    pub game: GameConfig,
    /// Fixed secret instead of a random pick from the list
    pub secret: Option<String>,
}

/// How the game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayResult {
    Won { secret: Word, attempts: usize },
    Lost { secret: Word },
    /// The word list had no usable words
    NoWords { word_len: usize },
    /// Input ended before the game did
    Abandoned,
}

/// Run one game, reading guesses from `input` and writing to `out`
///
/// # Errors
///
/// Returns an error if a word list file cannot be read, if the configured
/// secret is invalid for the tier, or on I/O failure.
pub fn run_play<I, O, R>(
    config: &PlayConfig,
    input: &mut I,
    out: &mut O,
    rng: &mut R,
) -> Result<PlayResult>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    let difficulty = match config.difficulty {
        Some(difficulty) => difficulty,
        None => choose_difficulty(input, out)?,
    };

    let words = match load_words(difficulty, &config.source) {
        Ok(words) => words,
        Err(WordListError::Empty { word_len }) => {
            writeln!(out, "No words of length {word_len} found in the word list.")?;
            return Ok(PlayResult::NoWords { word_len });
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Cannot start a {difficulty} game"));
        }
    };

    let mut game = match &config.secret {
        Some(text) => {
            let secret = Word::new(text).with_context(|| format!("Invalid secret word '{text}'"))?;
            if secret.len() != difficulty.word_len() {
                bail!(
                    "Secret word '{secret}' has {} letters, {difficulty} needs {}",
                    secret.len(),
                    difficulty.word_len()
                );
            }
            Game::new(secret, &words, config.game)
        }
        None => Game::random(&words, config.game, rng).context("Word list is empty")?,
    };

    info!(
        "starting {difficulty} game with {} candidate words",
        words.len()
    );

    writeln!(out, "Welcome to Wordle!")?;
    writeln!(
        out,
        "You have {} attempts to guess the correct word.",
        game.config().max_attempts
    )?;

    let mut feedback: Vec<String> = Vec::new();

    while !game.status().is_over() {
        write!(out, "Attempt {}: Enter your guess: ", game.attempt_number())?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            return Ok(PlayResult::Abandoned);
        };

        match game.submit(&line, rng) {
            GuessOutcome::Scored { guess, verdict, .. } => {
                feedback.push(feedback_line(&guess, &verdict));
                for entry in &feedback {
                    writeln!(out, "{entry}")?;
                }
            }
            GuessOutcome::Rejected { rejection, .. } => {
                writeln!(out, "{rejection}")?;
            }
        }
    }

    let secret = game.secret().clone();
    match game.status() {
        GameStatus::Won { attempts } => {
            writeln!(out, "Congratulations! You've guessed the word '{secret}'.")?;
            Ok(PlayResult::Won { secret, attempts })
        }
        _ => {
            writeln!(
                out,
                "Sorry, you've run out of attempts. The correct word was '{secret}'."
            )?;
            Ok(PlayResult::Lost { secret })
        }
    }
}

/// Show the difficulty menu and read a choice, falling back to Normal
fn choose_difficulty<I: BufRead, O: Write>(input: &mut I, out: &mut O) -> Result<Difficulty> {
    writeln!(out, "Choose difficulty level:")?;
    writeln!(out, "1. Easy (4-letter words)")?;
    writeln!(out, "2. Normal (5-letter words)")?;
    writeln!(out, "3. Hard (7-letter words)")?;
    write!(out, "Enter your choice (1, 2, or 3): ")?;
    out.flush()?;

    let choice = read_line(input)?.unwrap_or_default();
    if let Some(difficulty) = Difficulty::from_choice(&choice) {
        return Ok(difficulty);
    }

    writeln!(out, "Invalid choice. Defaulting to Normal (5-letter words).")?;
    Ok(Difficulty::Normal)
}

/// Read one line without its terminator; `None` at end of input
fn read_line<I: BufRead>(input: &mut I) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
