//! Word list check command
//!
//! Reports whether a word pool can support sessions of a given length.

use crate::core::Word;
use crate::game::{GameConfig, GameEngine, GameError};
use rustc_hash::FxHashSet;

/// Summary of a word pool
pub struct CheckReport {
    pub total_words: usize,
    pub distinct_words: usize,
    pub shortest: Option<String>,
    pub longest: Option<String>,
    pub average_length: f64,
    /// Words whose letters have only one arrangement
    pub unscramblable: Vec<String>,
    pub max_words: usize,
    /// Why sessions cannot be played with this pool, if they cannot
    pub problem: Option<GameError>,
}

impl CheckReport {
    #[must_use]
    pub const fn is_playable(&self) -> bool {
        self.problem.is_none()
    }
}

/// Inspect `words` against `config`
#[must_use]
pub fn check_pool(words: &[Word], config: GameConfig) -> CheckReport {
    let distinct: FxHashSet<&Word> = words.iter().collect();

    let unscramblable = words
        .iter()
        .filter(|w| !w.can_scramble())
        .map(|w| w.text().to_string())
        .collect();

    let total_letters: usize = words.iter().map(Word::len).sum();
    let average_length = if words.is_empty() {
        0.0
    } else {
        total_letters as f64 / words.len() as f64
    };

    let problem = GameEngine::seeded(words.iter().cloned(), config, 0).err();

    CheckReport {
        total_words: words.len(),
        distinct_words: distinct.len(),
        shortest: words
            .iter()
            .min_by_key(|w| w.len())
            .map(|w| w.text().to_string()),
        longest: words
            .iter()
            .max_by_key(|w| w.len())
            .map(|w| w.text().to_string()),
        average_length,
        unscramblable,
        max_words: config.max_words,
        problem,
    }
}
