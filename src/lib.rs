//! Unscramble
//!
//! A word unscrambling game: each round shows a shuffled word, the player
//! types the original, and a session ends after a fixed number of words.
//!
//! # Quick Start
//!
//! ```rust
//! use unscramble::game::{GameConfig, GameEngine};
//! use unscramble::wordlists::{WORDS, loader::words_from_slice};
//!
//! let mut engine = GameEngine::seeded(words_from_slice(WORDS), GameConfig::default(), 42)?;
//! println!("Unscramble: {}", engine.current_scrambled_word());
//!
//! let answer = engine.reveal().text().to_uppercase();
//! assert!(engine.is_user_word_correct(&answer));
//! assert_eq!(engine.score(), 20);
//! assert!(engine.next_word());
//! # Ok::<(), unscramble::game::GameError>(())
//! ```

// Core domain types
pub mod core;

// Session state engine
pub mod game;

// Word pools
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
