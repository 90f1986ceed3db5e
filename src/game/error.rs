//! Engine construction errors

use std::fmt;

/// Reasons a session cannot be set up
///
/// Guesses and round limits are ordinary boolean outcomes and never show up
/// here; these variants only describe configurations under which word
/// selection could spin forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A session needs at least one round
    ZeroRounds,
    /// Fewer distinct words than rounds per session
    PoolTooSmall { available: usize, required: usize },
    /// A pool word has only one arrangement of its letters
    UnscramblableWord(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRounds => write!(f, "A session must have at least one word"),
            Self::PoolTooSmall {
                available,
                required,
            } => write!(
                f,
                "Word pool has {available} distinct words but a session needs {required}"
            ),
            Self::UnscramblableWord(word) => {
                write!(f, "Word '{word}' cannot be scrambled into a different order")
            }
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            GameError::PoolTooSmall {
                available: 3,
                required: 10
            }
            .to_string(),
            "Word pool has 3 distinct words but a session needs 10"
        );
        assert_eq!(
            GameError::UnscramblableWord("aaa".to_string()).to_string(),
            "Word 'aaa' cannot be scrambled into a different order"
        );
    }
}
