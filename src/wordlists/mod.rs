//! Word pools for unscramble sessions
//!
//! Provides the embedded default pool and loading of custom pools.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
