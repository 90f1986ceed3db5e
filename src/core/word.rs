//! Unscramble word representation
//!
//! A Word is a validated, lowercase, purely alphabetic ASCII string.

use rustc_hash::FxHashSet;
use std::fmt;

/// A lowercase ASCII word that can appear as a round's target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::Word;
    ///
    /// let word = Word::new("Animal").unwrap();
    /// assert_eq!(word.text(), "animal");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of distinct letters in the word
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.text.bytes().collect::<FxHashSet<u8>>().len()
    }

    /// Whether some arrangement of the letters differs from the word itself
    ///
    /// Words like "a" or "zzz" have a single arrangement and can never be
    /// presented scrambled.
    #[inline]
    #[must_use]
    pub fn can_scramble(&self) -> bool {
        self.distinct_letters() >= 2
    }

    /// Case-insensitive comparison against arbitrary player input
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::Word;
    ///
    /// let word = Word::new("koala").unwrap();
    /// assert!(word.matches_guess("KoAlA"));
    /// assert!(!word.matches_guess("koalas"));
    /// ```
    #[must_use]
    pub fn matches_guess(&self, guess: &str) -> bool {
        guess.to_lowercase() == self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
