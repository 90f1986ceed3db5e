//! Simulate command
//!
//! Plays many sessions automatically and summarizes the scores.

use crate::core::Word;
use crate::game::{GameConfig, GameEngine};
use anyhow::{Result, ensure};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Parameters for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub sessions: usize,
    /// Probability that the simulated player solves a round
    pub accuracy: f64,
    /// Base seed; session `i` uses `seed + i`
    pub seed: u64,
    pub game: GameConfig,
    pub show_progress: bool,
}

/// Outcome of a single simulated session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub score: u32,
    pub correct: usize,
    pub skipped: usize,
    pub wrong_guesses: usize,
}

/// Aggregate statistics over all simulated sessions
pub struct SimulationResult {
    pub total_sessions: usize,
    pub average_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub perfect_sessions: usize,
    pub total_correct: usize,
    pub total_skipped: usize,
    pub total_wrong: usize,
    pub distribution: BTreeMap<u32, usize>,
    pub duration: Duration,
    pub sessions_per_second: f64,
}

/// Play one session to completion
///
/// Each round the player answers correctly with probability `accuracy`;
/// otherwise it submits the scrambled letters as a guess, which is always
/// wrong, and skips.
pub fn play_session<R: Rng, P: Rng>(
    engine: &mut GameEngine<R>,
    player: &mut P,
    accuracy: f64,
) -> SessionOutcome {
    let mut outcome = SessionOutcome {
        score: 0,
        correct: 0,
        skipped: 0,
        wrong_guesses: 0,
    };

    loop {
        if player.random_bool(accuracy) {
            let answer = engine.reveal().text().to_string();
            if engine.is_user_word_correct(&answer) {
                outcome.correct += 1;
            }
        } else {
            let attempt = engine.current_scrambled_word().to_string();
            if !engine.is_user_word_correct(&attempt) {
                outcome.wrong_guesses += 1;
            }
            outcome.skipped += 1;
        }

        if !engine.next_word() {
            break;
        }
    }

    outcome.score = engine.score();
    outcome
}

/// Run `config.sessions` independent sessions in parallel
///
/// Results are reproducible for a given seed regardless of thread count.
///
/// # Errors
///
/// Returns an error if `accuracy` is outside `0.0..=1.0` or the pool cannot
/// support a session under `config.game`.
pub fn run_simulation(pool: &[Word], config: &SimulationConfig) -> Result<SimulationResult> {
    ensure!(
        (0.0..=1.0).contains(&config.accuracy),
        "Accuracy must be between 0 and 1, got {}",
        config.accuracy
    );

    // Fail fast on an unusable pool before spinning up workers
    GameEngine::seeded(pool.iter().cloned(), config.game, config.seed)?;

    let pb = if config.show_progress {
        ProgressBar::new(config.sessions as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let outcomes: Vec<SessionOutcome> = (0..config.sessions)
        .into_par_iter()
        .map(|i| -> Result<SessionOutcome> {
            let session_seed = config.seed.wrapping_add(i as u64);
            let mut engine =
                GameEngine::seeded(pool.iter().cloned(), config.game, session_seed)?;
            let mut player = StdRng::seed_from_u64(session_seed.rotate_left(32));
            let outcome = play_session(&mut engine, &mut player, config.accuracy);
            pb.inc(1);
            Ok(outcome)
        })
        .collect::<Result<_>>()?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let result = summarize(&outcomes, config.game, duration);
    info!(
        sessions = result.total_sessions,
        average = result.average_score,
        "simulation finished"
    );
    Ok(result)
}

fn summarize(outcomes: &[SessionOutcome], game: GameConfig, duration: Duration) -> SimulationResult {
    let total_sessions = outcomes.len();
    let mut distribution: BTreeMap<u32, usize> = BTreeMap::new();
    for outcome in outcomes {
        *distribution.entry(outcome.score).or_insert(0) += 1;
    }

    let total_score: u64 = outcomes.iter().map(|o| u64::from(o.score)).sum();
    let average_score = if total_sessions > 0 {
        total_score as f64 / total_sessions as f64
    } else {
        0.0
    };

    SimulationResult {
        total_sessions,
        average_score,
        min_score: outcomes.iter().map(|o| o.score).min().unwrap_or(0),
        max_score: outcomes.iter().map(|o| o.score).max().unwrap_or(0),
        perfect_sessions: outcomes
            .iter()
            .filter(|o| u64::from(o.score) == game.max_score())
            .count(),
        total_correct: outcomes.iter().map(|o| o.correct).sum(),
        total_skipped: outcomes.iter().map(|o| o.skipped).sum(),
        total_wrong: outcomes.iter().map(|o| o.wrong_guesses).sum(),
        distribution,
        duration,
        sessions_per_second: if duration.as_secs_f64() > 0.0 {
            total_sessions as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn config(sessions: usize, accuracy: f64) -> SimulationConfig {
        SimulationConfig {
            sessions,
            accuracy,
            seed: 2024,
            game: GameConfig::default(),
            show_progress: false,
        }
    }

    #[test]
    fn perfect_player_always_maxes_out() {
        let pool = words_from_slice(WORDS);
        let result = run_simulation(&pool, &config(20, 1.0)).unwrap();

        assert_eq!(result.total_sessions, 20);
        assert_eq!(result.min_score, 200);
        assert_eq!(result.max_score, 200);
        assert_eq!(result.perfect_sessions, 20);
        assert_eq!(result.total_correct, 200);
        assert_eq!(result.total_skipped, 0);
    }

    #[test]
    fn skipping_player_scores_nothing() {
        let pool = words_from_slice(WORDS);
        let result = run_simulation(&pool, &config(10, 0.0)).unwrap();

        assert_eq!(result.max_score, 0);
        assert_eq!(result.total_skipped, 100);
        assert_eq!(result.total_wrong, 100);
        assert_eq!(result.distribution.get(&0), Some(&10));
    }

    #[test]
    fn distribution_sums_to_sessions() {
        let pool = words_from_slice(WORDS);
        let result = run_simulation(&pool, &config(50, 0.5)).unwrap();

        let sum: usize = result.distribution.values().sum();
        assert_eq!(sum, 50);
        assert!(result.average_score >= f64::from(result.min_score));
        assert!(result.average_score <= f64::from(result.max_score));
        for score in result.distribution.keys() {
            assert_eq!(score % 20, 0);
        }
    }

    #[test]
    fn same_seed_same_statistics() {
        let pool = words_from_slice(WORDS);
        let a = run_simulation(&pool, &config(30, 0.4)).unwrap();
        let b = run_simulation(&pool, &config(30, 0.4)).unwrap();
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn rejects_bad_accuracy() {
        let pool = words_from_slice(WORDS);
        assert!(run_simulation(&pool, &config(1, 1.5)).is_err());
        assert!(run_simulation(&pool, &config(1, f64::NAN)).is_err());
    }

    #[test]
    fn rejects_small_pool() {
        let pool = words_from_slice(&["cat", "dog"]);
        assert!(run_simulation(&pool, &config(1, 1.0)).is_err());
    }

    #[test]
    fn zero_sessions() {
        let pool = words_from_slice(WORDS);
        let result = run_simulation(&pool, &config(0, 1.0)).unwrap();
        assert_eq!(result.total_sessions, 0);
        assert!(result.average_score.abs() < f64::EPSILON);
    }
}
