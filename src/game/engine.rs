//! Session state for one unscramble game
//!
//! The engine is polled by whatever front end drives it: it exposes read
//! accessors and a handful of mutating operations, nothing else.

use super::{GameConfig, GameError};
use crate::core::{Word, scramble};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use tracing::{debug, info, trace};

/// Whether a session can still produce rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Rounds are being played
    Active,
    /// An advance was refused because every round has been played
    Complete,
}

/// Game state engine
///
/// Holds the fixed word pool, the words already used this session, the
/// current target and its scrambled form, the score and the round counter.
/// A freshly built engine has its first round generated already, so
/// `current_word_count()` starts at 1.
pub struct GameEngine<R: Rng = StdRng> {
    pool: Vec<Word>,
    config: GameConfig,
    rng: R,
    used_words: FxHashSet<Word>,
    current_word: Word,
    scrambled_word: String,
    score: u32,
    word_count: usize,
    state: SessionState,
}

impl GameEngine<StdRng> {
    /// Build an engine with an OS-seeded generator
    ///
    /// # Errors
    ///
    /// See [`GameEngine::new`].
    pub fn from_entropy(
        pool: impl IntoIterator<Item = Word>,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        Self::new(pool, config, StdRng::from_os_rng())
    }

    /// Build an engine whose sessions are reproducible from `seed`
    ///
    /// # Errors
    ///
    /// See [`GameEngine::new`].
    pub fn seeded(
        pool: impl IntoIterator<Item = Word>,
        config: GameConfig,
        seed: u64,
    ) -> Result<Self, GameError> {
        Self::new(pool, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine and start its first session
    ///
    /// Duplicate pool entries are dropped, keeping first occurrences.
    ///
    /// # Errors
    ///
    /// Returns `GameError` when word selection could fail to terminate:
    /// - `max_words` is zero
    /// - a pool word has a single arrangement of its letters
    /// - the pool has fewer distinct words than `max_words`
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::Word;
    /// use unscramble::game::{GameConfig, GameEngine};
    ///
    /// let pool = ["cat", "dog", "owl"].map(|w| Word::new(w).unwrap());
    /// let mut engine = GameEngine::seeded(pool, GameConfig::new(3, 20), 1).unwrap();
    ///
    /// assert_eq!(engine.current_word_count(), 1);
    /// assert_eq!(engine.score(), 0);
    /// assert!(engine.next_word());
    /// assert!(engine.next_word());
    /// assert!(!engine.next_word());
    /// ```
    pub fn new(
        pool: impl IntoIterator<Item = Word>,
        config: GameConfig,
        rng: R,
    ) -> Result<Self, GameError> {
        let mut seen = FxHashSet::default();
        let pool: Vec<Word> = pool
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .collect();

        if config.max_words == 0 {
            return Err(GameError::ZeroRounds);
        }

        if let Some(word) = pool.iter().find(|word| !word.can_scramble()) {
            return Err(GameError::UnscramblableWord(word.text().to_string()));
        }

        if pool.len() < config.max_words {
            return Err(GameError::PoolTooSmall {
                available: pool.len(),
                required: config.max_words,
            });
        }

        // Placeholder until reset() generates the first round
        let current_word = pool[0].clone();

        let mut engine = Self {
            pool,
            config,
            rng,
            used_words: FxHashSet::default(),
            current_word,
            scrambled_word: String::new(),
            score: 0,
            word_count: 0,
            state: SessionState::Active,
        };
        engine.reset();

        debug!(
            pool_size = engine.pool.len(),
            max_words = engine.config.max_words,
            "game engine created"
        );
        Ok(engine)
    }

    /// Start a new session: clear used words, zero the counters and
    /// generate the first round
    pub fn reset(&mut self) {
        self.score = 0;
        self.word_count = 0;
        self.used_words.clear();
        self.state = SessionState::Active;
        self.get_next_word();
        info!("session started");
    }

    /// Move on to the next round
    ///
    /// Returns `false` once every round of the session has been played, in
    /// which case nothing changes except that the session is marked
    /// complete.
    pub fn next_word(&mut self) -> bool {
        if self.word_count < self.config.max_words {
            self.get_next_word();
            true
        } else {
            if self.state == SessionState::Active {
                info!(score = self.score, "session complete");
            }
            self.state = SessionState::Complete;
            false
        }
    }

    /// Check a guess against the current target, ignoring case
    ///
    /// A correct guess adds the configured increment to the score.
    pub fn is_user_word_correct(&mut self, player_word: &str) -> bool {
        if self.current_word.matches_guess(player_word) {
            self.increase_score();
            true
        } else {
            false
        }
    }

    fn increase_score(&mut self) {
        self.score = self.score.saturating_add(self.config.score_increase);
    }

    /// Draw an unused word and scramble it
    ///
    /// Construction guarantees enough distinct, scramblable words for the
    /// whole session, so the redraw loop terminates.
    fn get_next_word(&mut self) {
        loop {
            let index = self.rng.random_range(0..self.pool.len());
            let candidate = &self.pool[index];

            let Some(scrambled) = scramble(candidate, &mut self.rng) else {
                continue;
            };

            if self.used_words.contains(candidate) {
                continue;
            }

            self.current_word = candidate.clone();
            self.scrambled_word = scrambled;
            self.word_count += 1;
            self.used_words.insert(self.current_word.clone());

            trace!(target_word = %self.current_word, "round target");
            debug!(
                word_count = self.word_count,
                scrambled = %self.scrambled_word,
                "new round"
            );
            return;
        }
    }

    /// The scrambled form of the current target
    #[must_use]
    pub fn current_scrambled_word(&self) -> &str {
        &self.scrambled_word
    }

    /// The current target word
    ///
    /// Front ends use this to show the answer after a skip.
    #[must_use]
    pub const fn reveal(&self) -> &Word {
        &self.current_word
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Rounds generated so far this session, the current one included
    #[must_use]
    pub const fn current_word_count(&self) -> usize {
        self.word_count
    }

    #[must_use]
    pub const fn max_words(&self) -> usize {
        self.config.max_words
    }

    /// Rounds that can still be generated by `next_word`
    #[must_use]
    pub const fn rounds_remaining(&self) -> usize {
        self.config.max_words.saturating_sub(self.word_count)
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Complete
    }

    /// Words presented during the current session
    #[must_use]
    pub const fn used_words(&self) -> &FxHashSet<Word> {
        &self.used_words
    }

    /// The deduplicated word pool
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }
}

impl<R: Rng> Drop for GameEngine<R> {
    fn drop(&mut self) {
        debug!(score = self.score, "game engine dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::is_permutation_of;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn default_engine(seed: u64) -> GameEngine {
        GameEngine::seeded(words_from_slice(WORDS), GameConfig::default(), seed).unwrap()
    }

    fn small_pool() -> Vec<Word> {
        words_from_slice(&["cat", "dog", "owl", "fox", "emu"])
    }

    #[test]
    fn fresh_session_counters() {
        let engine = default_engine(1);
        assert_eq!(engine.current_word_count(), 1);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.state(), SessionState::Active);
        assert_eq!(engine.used_words().len(), 1);
        assert!(engine.used_words().contains(engine.reveal()));
        assert_eq!(engine.rounds_remaining(), 9);
    }

    #[test]
    fn scrambled_word_is_permutation_and_differs() {
        let mut engine = default_engine(2);
        loop {
            let target = engine.reveal().text().to_string();
            let shuffled = engine.current_scrambled_word();
            assert_ne!(shuffled, target);
            assert!(is_permutation_of(shuffled, &target));
            if !engine.next_word() {
                break;
            }
        }
    }

    #[test]
    fn correct_guess_in_other_case_scores() {
        let mut engine = default_engine(3);
        let guess = engine.reveal().text().to_uppercase();

        assert!(engine.is_user_word_correct(&guess));
        assert_eq!(engine.score(), 20);
    }

    #[test]
    fn wrong_guess_leaves_score() {
        let mut engine = default_engine(4);
        assert!(!engine.is_user_word_correct("definitelynotaword"));
        assert!(!engine.is_user_word_correct(""));
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.current_word_count(), 1);
    }

    #[test]
    fn scrambled_form_is_not_accepted() {
        let mut engine = default_engine(5);
        let shuffled = engine.current_scrambled_word().to_string();
        assert!(!engine.is_user_word_correct(&shuffled));
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn score_accumulates_per_correct_guess() {
        let mut engine = default_engine(6);
        for expected in 1..=3 {
            let answer = engine.reveal().text().to_string();
            assert!(engine.is_user_word_correct(&answer));
            assert_eq!(engine.score(), 20 * expected);
            assert!(engine.next_word());
        }
    }

    #[test]
    fn advance_stops_at_max_words() {
        let mut engine = default_engine(7);

        for expected_count in 2..=10 {
            assert!(engine.next_word());
            assert_eq!(engine.current_word_count(), expected_count);
            assert_eq!(engine.state(), SessionState::Active);
        }

        assert_eq!(engine.rounds_remaining(), 0);
        assert!(!engine.next_word());
        assert_eq!(engine.current_word_count(), 10);
        assert!(engine.is_complete());

        // Still refused, still unchanged
        let scrambled = engine.current_scrambled_word().to_string();
        assert!(!engine.next_word());
        assert_eq!(engine.current_word_count(), 10);
        assert_eq!(engine.current_scrambled_word(), scrambled);
    }

    #[test]
    fn no_word_repeats_within_session() {
        // Pool exactly as large as the session forces every word to appear once
        let mut engine = GameEngine::seeded(small_pool(), GameConfig::new(5, 20), 8).unwrap();
        let mut seen = vec![engine.reveal().clone()];
        while engine.next_word() {
            assert!(!seen.contains(engine.reveal()));
            seen.push(engine.reveal().clone());
        }

        assert_eq!(seen.len(), 5);
        assert_eq!(engine.used_words().len(), 5);
    }

    #[test]
    fn reset_after_completion() {
        let mut engine = default_engine(9);
        let answer = engine.reveal().text().to_string();
        assert!(engine.is_user_word_correct(&answer));
        while engine.next_word() {}
        assert!(engine.is_complete());

        engine.reset();

        assert_eq!(engine.current_word_count(), 1);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.state(), SessionState::Active);
        assert_eq!(engine.used_words().len(), 1);
        assert!(engine.used_words().contains(engine.reveal()));
        assert!(engine.next_word());
    }

    #[test]
    fn seeded_engines_agree() {
        let a = default_engine(10);
        let b = default_engine(10);
        assert_eq!(a.reveal(), b.reveal());
        assert_eq!(a.current_scrambled_word(), b.current_scrambled_word());
    }

    #[test]
    fn custom_score_increase() {
        let mut engine = GameEngine::seeded(small_pool(), GameConfig::new(3, 5), 11).unwrap();
        let answer = engine.reveal().text().to_string();
        assert!(engine.is_user_word_correct(&answer));
        assert_eq!(engine.score(), 5);
    }

    #[test]
    fn duplicates_are_removed_from_pool() {
        let pool = words_from_slice(&["cat", "CAT", "dog", "cat"]);
        let engine = GameEngine::seeded(pool, GameConfig::new(2, 20), 12).unwrap();
        assert_eq!(engine.pool().len(), 2);
    }

    #[test]
    fn rejects_pool_smaller_than_session() {
        let pool = words_from_slice(&["cat", "dog", "dog"]);
        let result = GameEngine::seeded(pool, GameConfig::new(3, 20), 13);
        assert!(matches!(
            result,
            Err(GameError::PoolTooSmall {
                available: 2,
                required: 3
            })
        ));
    }

    #[test]
    fn rejects_empty_pool() {
        let result = GameEngine::seeded(Vec::new(), GameConfig::default(), 14);
        assert!(matches!(result, Err(GameError::PoolTooSmall { .. })));
    }

    #[test]
    fn rejects_unscramblable_word() {
        let pool = words_from_slice(&["cat", "zzz", "dog"]);
        let result = GameEngine::seeded(pool, GameConfig::new(2, 20), 15);
        assert_eq!(
            result.err(),
            Some(GameError::UnscramblableWord("zzz".to_string()))
        );
    }

    #[test]
    fn rejects_zero_rounds() {
        let result = GameEngine::seeded(small_pool(), GameConfig::new(0, 20), 16);
        assert_eq!(result.err(), Some(GameError::ZeroRounds));
    }

    #[test]
    fn single_round_session() {
        let mut engine = GameEngine::seeded(small_pool(), GameConfig::new(1, 20), 17).unwrap();
        assert_eq!(engine.current_word_count(), 1);
        assert!(!engine.next_word());
        assert!(engine.is_complete());
    }
}
