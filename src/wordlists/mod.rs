//! Word lists for each difficulty tier
//!
//! Lists are embedded into the binary at build time, or loaded from
//! `WORD_LIST1.txt`/`WORD_LIST2.txt`/`WORD_LIST3.txt` in a directory.

mod embedded;
pub mod loader;

pub use embedded::{EASY, EASY_COUNT, HARD, HARD_COUNT, NORMAL, NORMAL_COUNT};
pub use loader::{WordListError, WordSource, load_words};

use crate::game::Difficulty;

/// Embedded list for a difficulty tier
#[must_use]
pub const fn embedded(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Easy => EASY,
        Difficulty::Normal => NORMAL,
        Difficulty::Hard => HARD,
    }
}
