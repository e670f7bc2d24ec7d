//! [`GuessGame`]: one round of the guessing game.
//!
//! # Concurrency note
//!
//! A browser can double-submit the guess form, so two requests for the
//! same session may hit the same game at once. All mutable state lives
//! behind one `parking_lot::Mutex`, and every read-modify-write happens
//! while holding it: each accepted guess consumes exactly one attempt and
//! the count never drops below zero.

use std::fmt;

use parking_lot::Mutex;
use rand::Rng;

use crate::{GameError, GameStatus, GuessOutcome};

/// The upper bound (exclusive) on the numbers to be guessed.
pub const UPPER_BOUND: i32 = 10;

/// The number of guess attempts allotted per round.
pub const MAX_ATTEMPTS: u32 = 3;

/// Returns `true` if `guess` falls within the game bounds (`0..UPPER_BOUND`).
///
/// This does not issue a guess and doesn't need a game at all.
pub fn is_valid_guess(guess: i32) -> bool {
    (0..UPPER_BOUND).contains(&guess)
}

/// The part of a game that changes as guesses come in.
#[derive(Debug, Clone, Copy)]
struct Progress {
    guesses_left: u32,
    /// Set by the guess that found the target.
    won: bool,
}

/// A single guessing game.
///
/// The target is fixed at creation. The only mutation is
/// [`make_guess`](Self::make_guess) (and its sibling
/// [`submit`](Self::submit)), which always consumes one attempt, right
/// or wrong.
#[derive(Debug)]
pub struct GuessGame {
    target: i32,
    progress: Mutex<Progress>,
}

impl GuessGame {
    /// Creates a game with a random target drawn uniformly from
    /// `0..UPPER_BOUND`.
    pub fn new() -> Self {
        let target = rand::rng().random_range(0..UPPER_BOUND);
        Self::start(target)
    }

    /// Creates a game with a known target. Mostly useful for tests.
    ///
    /// # Errors
    /// Returns [`GameError::TargetOutOfRange`] unless
    /// `0 <= target < UPPER_BOUND`.
    pub fn with_target(target: i32) -> Result<Self, GameError> {
        if !is_valid_guess(target) {
            return Err(GameError::TargetOutOfRange(target));
        }
        Ok(Self::start(target))
    }

    /// Creates a game with the given target, or a random one if `None`.
    ///
    /// # Errors
    /// Returns [`GameError::TargetOutOfRange`] for an explicit target
    /// outside `0..UPPER_BOUND`.
    pub fn create(target: Option<i32>) -> Result<Self, GameError> {
        match target {
            Some(target) => Self::with_target(target),
            None => Ok(Self::new()),
        }
    }

    fn start(target: i32) -> Self {
        Self {
            target,
            progress: Mutex::new(Progress {
                guesses_left: MAX_ATTEMPTS,
                won: false,
            }),
        }
    }

    /// Returns `true` if no guesses have been made yet.
    pub fn is_game_beginning(&self) -> bool {
        self.progress.lock().guesses_left == MAX_ATTEMPTS
    }

    /// Returns `true` if `guess` falls within the game bounds.
    ///
    /// Same as the free function [`is_valid_guess`]; it ignores the state
    /// of this game, even a finished one.
    pub fn is_valid_guess(&self, guess: i32) -> bool {
        is_valid_guess(guess)
    }

    /// Makes a guess. Returns `true` if it matches the hidden number.
    ///
    /// Consumes one attempt whether or not the guess is right.
    ///
    /// # Errors
    /// - [`GameError::GuessOutOfRange`]: `guess` is outside
    ///   `0..UPPER_BOUND`; no attempt is consumed
    /// - [`GameError::NoMoreGuesses`]: every attempt is used up
    /// - [`GameError::AlreadyWon`]: the target was already found
    pub fn make_guess(&self, guess: i32) -> Result<bool, GameError> {
        self.apply(guess).map(|(correct, _)| correct)
    }

    /// Makes a guess and reports what it led to.
    ///
    /// The outcome is computed under the same lock as the guess, so a
    /// concurrent guess can't slip in between and change the answer.
    ///
    /// # Errors
    /// Same as [`make_guess`](Self::make_guess).
    pub fn submit(&self, guess: i32) -> Result<GuessOutcome, GameError> {
        self.apply(guess)
            .map(|(correct, left)| GuessOutcome::derive(correct, left))
    }

    fn apply(&self, guess: i32) -> Result<(bool, u32), GameError> {
        if !is_valid_guess(guess) {
            return Err(GameError::GuessOutOfRange(guess));
        }

        let mut progress = self.progress.lock();
        if progress.won {
            return Err(GameError::AlreadyWon);
        }
        if progress.guesses_left == 0 {
            return Err(GameError::NoMoreGuesses);
        }

        progress.guesses_left -= 1;
        let correct = guess == self.target;
        progress.won = correct;

        tracing::trace!(
            guess,
            correct,
            guesses_left = progress.guesses_left,
            "guess made"
        );
        Ok((correct, progress.guesses_left))
    }

    /// Returns `true` if the player has attempts left.
    pub fn has_more_guesses(&self) -> bool {
        self.progress.lock().guesses_left > 0
    }

    /// Returns the number of attempts left in this game.
    pub fn guesses_left(&self) -> u32 {
        self.progress.lock().guesses_left
    }

    /// Returns a consistent snapshot of where the round stands.
    pub fn status(&self) -> GameStatus {
        let progress = *self.progress.lock();
        match progress {
            Progress { won: true, .. } => GameStatus::Won,
            Progress { guesses_left: 0, .. } => GameStatus::Lost,
            Progress { guesses_left, .. } => {
                GameStatus::InProgress { guesses_left }
            }
        }
    }
}

impl Default for GuessGame {
    fn default() -> Self {
        Self::new()
    }
}

/// Shows the hidden number. Only for server-side debug logs.
impl fmt::Display for GuessGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Game {}}}", self.target)
    }
}

// =========================================================================
// Tests
// =========================================================================
