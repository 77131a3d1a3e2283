//! Error type shared by the dictionary, scoring and round modules.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Everything that can go wrong while loading words or playing a round.
#[derive(Debug)]
pub enum GameError {
    /// The word source could not be opened or read.
    Load { path: PathBuf, source: io::Error },
    /// No word is available to pick a target from.
    EmptyDictionary,
    /// Guess and target differ in length (counted in characters).
    LengthMismatch { expected: usize, actual: usize },
    /// The guess is not a recognized word.
    NotInDictionary(String),
    /// The round has already been won or lost.
    RoundOver,
}

impl GameError {
    /// Recoverable errors are answered with a re-prompt and never cost a turn.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::LengthMismatch { .. } | Self::NotInDictionary(_))
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load { path, source } => {
                write!(f, "Failed to load dictionary from '{}': {source}", path.display())
            }
            Self::EmptyDictionary => write!(f, "The dictionary has no words to choose from"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Guess must be exactly {expected} letters, got {actual}")
            }
            Self::NotInDictionary(word) => write!(f, "'{word}' is not in the dictionary"),
            Self::RoundOver => write!(f, "The round is already over"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load { source, .. } => Some(source),
            _ => None,
        }
    }
}
