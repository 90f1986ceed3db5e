//! Core domain types for Unscramble
//!
//! The word type and the scramble routine. Everything here is pure apart
//! from the caller-supplied random number generator.

mod scramble;
mod word;

pub use scramble::{is_permutation_of, scramble};
pub use word::{Word, WordError};
