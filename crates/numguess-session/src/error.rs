//! Error types for the session layer.

use numguess_game::ErrorKind;

/// Errors that can occur during session-scoped game management.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The caller didn't supply a session handle.
    /// The web layer always resolves one first, so this is a caller bug.
    #[error("session must not be absent")]
    MissingSession,
}

impl SessionError {
    /// Returns the broad classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingSession => ErrorKind::InvalidArgument,
        }
    }
}
