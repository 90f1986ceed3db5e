//! Session configuration

/// Number of words in a session
pub const MAX_NO_OF_WORDS: usize = 10;

/// Points awarded for each correct guess
pub const SCORE_INCREASE: u32 = 20;

/// Tunable session parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Rounds per session; `next_word` refuses to go past this
    pub max_words: usize,
    /// Score added per correct guess
    pub score_increase: u32,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_words: usize, score_increase: u32) -> Self {
        Self {
            max_words,
            score_increase,
        }
    }

    /// Highest score reachable in one session
    #[must_use]
    pub fn max_score(&self) -> u64 {
        self.max_words as u64 * u64::from(self.score_increase)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(MAX_NO_OF_WORDS, SCORE_INCREASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.max_words, 10);
        assert_eq!(config.score_increase, 20);
        assert_eq!(config.max_score(), 200);
    }
}
