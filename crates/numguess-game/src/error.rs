//! Error types for the game layer.

use crate::{MAX_ATTEMPTS, UPPER_BOUND};

/// Broad classification of a [`GameError`].
///
/// Higher layers only care whether the caller passed something bad
/// (`InvalidArgument`) or called at the wrong time (`IllegalState`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value outside the allowed range (or a missing handle).
    InvalidArgument,

    /// The operation is not allowed in the current state of the game.
    /// Always a bug in the caller, never bad user input.
    IllegalState,
}

/// Errors that can occur while creating or playing a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The explicit target passed to the constructor is out of range.
    #[error("target {0} is out of range (expected 0..{bound})", bound = UPPER_BOUND)]
    TargetOutOfRange(i32),

    /// The submitted guess is out of range.
    ///
    /// Callers should check [`is_valid_guess`](crate::is_valid_guess)
    /// before guessing so they can show the player a friendly message.
    #[error("guess {0} is out of range (expected 0..{bound})", bound = UPPER_BOUND)]
    GuessOutOfRange(i32),

    /// All `MAX_ATTEMPTS` guesses have been used.
    #[error("no more guesses allowed (all {max} used)", max = MAX_ATTEMPTS)]
    NoMoreGuesses,

    /// The target was already found; the round is over.
    #[error("the game has already been won")]
    AlreadyWon,
}

impl GameError {
    /// Returns the broad classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TargetOutOfRange(_) | Self::GuessOutOfRange(_) => {
                ErrorKind::InvalidArgument
            }
            Self::NoMoreGuesses | Self::AlreadyWon => ErrorKind::IllegalState,
        }
    }
}
