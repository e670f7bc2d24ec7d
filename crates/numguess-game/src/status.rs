//! Game states and guess outcomes.

use std::fmt;

// ---------------------------------------------------------------------------
// GameStatus
// ---------------------------------------------------------------------------

/// Where a round stands.
///
/// ```text
/// InProgress(3) ──guess──→ InProgress(2) ──guess──→ InProgress(1) ──guess──→ Lost
///       │                        │                        │
///       └────────────────────────┴───── correct guess ────┴──────────────→ Won
/// ```
///
/// - **InProgress**: the target hasn't been found and attempts remain.
/// - **Won**: the last accepted guess matched the target. A correct guess
///   on the final attempt is still a win.
/// - **Lost**: every attempt was used without finding the target.
///
/// `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { guesses_left: u32 },
    Won,
    Lost,
}

impl GameStatus {
    /// Returns `true` if the round is over (won or lost).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress { guesses_left } => {
                write!(f, "InProgress({guesses_left})")
            }
            Self::Won => write!(f, "Won"),
            Self::Lost => write!(f, "Lost"),
        }
    }
}

// ---------------------------------------------------------------------------
// GuessOutcome
// ---------------------------------------------------------------------------

/// What a single accepted guess led to.
///
/// This is the answer the web layer needs to pick the next view: show the
/// win page, ask again, or show the loss page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess matched the target.
    Won,

    /// Wrong, but the player can try again.
    TryAgain { guesses_left: u32 },

    /// Wrong, and that was the last attempt.
    Lost,
}

impl GuessOutcome {
    /// Derives the outcome from a guess result and the attempts left
    /// after it. A correct guess wins even when no attempts remain.
    pub fn derive(correct: bool, guesses_left: u32) -> Self {
        match (correct, guesses_left) {
            (true, _) => Self::Won,
            (false, 0) => Self::Lost,
            (false, guesses_left) => Self::TryAgain { guesses_left },
        }
    }

    /// Returns `true` if this outcome ends the round.
    pub fn ends_game(&self) -> bool {
        !matches!(self, Self::TryAgain { .. })
    }
}
