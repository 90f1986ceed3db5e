//! Game state engine
//!
//! Owns the word pool, the round counters and the score for one session.

mod config;
mod engine;
mod error;

pub use config::{GameConfig, MAX_NO_OF_WORDS, SCORE_INCREASE};
pub use engine::{GameEngine, SessionState};
pub use error::GameError;
