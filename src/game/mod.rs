//! Game rules: difficulty tiers and the per-game session

mod difficulty;
mod session;

pub use difficulty::Difficulty;
pub use session::{
    Game, GameConfig, GameStatus, GuessOutcome, InvalidGuessPolicy, MAX_ATTEMPTS, Rejection,
};
