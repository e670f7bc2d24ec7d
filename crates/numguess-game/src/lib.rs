//! The guessing game itself.
//!
//! A [`GuessGame`] is one round: a hidden number in `0..UPPER_BOUND` and
//! `MAX_ATTEMPTS` tries to find it. This crate knows nothing about
//! sessions or HTTP; it only knows the rules.
//!
//! # How it fits in the stack
//!
//! ```text
//! Web Layer (numguess)          ← turns requests into guesses, renders views
//!     ↕
//! Session Layer (numguess-session) ← one game per browser session, global stats
//!     ↕
//! Game Layer (this crate)       ← target, attempts, guess rules
//! ```

mod error;
mod game;
mod status;

pub use error::{ErrorKind, GameError};
pub use game::{is_valid_guess, GuessGame, MAX_ATTEMPTS, UPPER_BOUND};
pub use status::{GameStatus, GuessOutcome};
