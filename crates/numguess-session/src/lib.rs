//! Browser sessions and the per-session game lifecycle for Numguess.
//!
//! This crate handles two things:
//!
//! 1. **Session storage**: an opaque id per browser with attribute slots
//!    ([`SessionStore`] trait, [`MemorySessionStore`] implementation)
//! 2. **Game lifecycle**: one game per session, created lazily and
//!    evicted when it ends, plus site-wide statistics ([`GameCenter`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Web Layer (above)      ← resolves the session cookie, drives guesses
//!     ↕
//! Session Layer (this crate) ← which game belongs to which browser
//!     ↕
//! Game Layer (below)     ← GuessGame rules
//! ```

mod center;
mod error;
mod session;
mod store;

pub use center::{
    GameCenter, GAMES_PLAYED_FORMAT, GAME_ID, NO_GAMES_MESSAGE,
    ONE_GAME_MESSAGE,
};
pub use error::SessionError;
pub use session::{SessionConfig, SessionId};
pub use store::{MemorySessionStore, SessionStore};
