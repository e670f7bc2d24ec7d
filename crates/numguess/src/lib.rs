//! # Numguess
//!
//! A number-guessing game served over HTTP.
//!
//! Each browser gets a session (tracked with a cookie) holding at most one
//! game: guess a number from 0 to 9 in three tries. Site-wide statistics
//! count every finished game.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use numguess::prelude::*;
//!
//! # async fn run() -> Result<(), NumguessError> {
//! let server = NumguessServer::builder()
//!     .bind("127.0.0.1:4567")
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```
//!
//! ## Routes
//!
//! | Method | Path     | Page                                         |
//! |--------|----------|----------------------------------------------|
//! | GET    | `/`      | welcome page, or redirect to `/game`         |
//! | GET    | `/game`  | guess form                                   |
//! | POST   | `/guess` | form field `myGuess`; try again, won or lost |

mod error;
pub mod handler;
pub mod router;
mod server;
pub mod view;

pub use error::NumguessError;
pub use server::{NumguessServer, NumguessServerBuilder};

pub mod prelude {
    pub use crate::router::{router, SharedCenter, SESSION_COOKIE};
    pub use crate::view::{MessageType, Page, View, ViewModel};
    pub use crate::{NumguessError, NumguessServer, NumguessServerBuilder};
    pub use numguess_game::{
        GameError, GameStatus, GuessGame, GuessOutcome, MAX_ATTEMPTS,
        UPPER_BOUND,
    };
    pub use numguess_session::{
        GameCenter, MemorySessionStore, SessionConfig, SessionError,
        SessionId, SessionStore,
    };
}
