//! Unified error type for Numguess.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use numguess_game::{ErrorKind, GameError};
use numguess_session::SessionError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant auto-generates `From` impls,
/// so `?` converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum NumguessError {
    /// A game-level error (out-of-range value, guess after game over).
    #[error(transparent)]
    Game(#[from] GameError),

    /// A session-level error (missing session handle).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Binding or serving the listener failed.
    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl NumguessError {
    /// The HTTP status this error maps to.
    ///
    /// Bad values are the client's fault (400). A guess on a finished game
    /// means two requests raced on one session (409). Anything else is
    /// ours (500).
    pub fn status(&self) -> StatusCode {
        let kind = match self {
            Self::Game(e) => e.kind(),
            Self::Session(e) => e.kind(),
            Self::Io(_) => return StatusCode::INTERNAL_SERVER_ERROR,
        };
        match kind {
            ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
            ErrorKind::IllegalState => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for NumguessError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, %status, "request rejected");
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
