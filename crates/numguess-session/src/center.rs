//! The game center: one game per browser session, plus site-wide stats.
//!
//! # Concurrency note
//!
//! `GameCenter` is shared by every request handler (behind an `Arc`) and
//! only needs `&self`:
//! - per-session state lives in the [`SessionStore`], which locks per
//!   session
//! - the completed-games counter is a single `AtomicU64`, so every
//!   increment lands and every read sees a whole value

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use numguess_game::GuessGame;

use crate::{MemorySessionStore, SessionError, SessionId, SessionStore};

/// The session attribute name that holds a player's current game.
pub const GAME_ID: &str = "game";

/// Stats message when nobody has finished a game yet.
pub const NO_GAMES_MESSAGE: &str = "No games has been played so far.";

/// Stats message after exactly one finished game.
pub const ONE_GAME_MESSAGE: &str = "One game has been played so far.";

/// Stats message template for two or more games; `{}` is the count.
pub const GAMES_PLAYED_FORMAT: &str = "There have been {} games played.";

/// Coordinates the games of every browser session.
///
/// ## Lifecycle of one session's game
///
/// ```text
/// get() ──→ [no game] ──create──→ [game stored] ──get()──→ same game
///                                       │
///                                     end() ──→ [no game], total_games += 1
/// ```
pub struct GameCenter<S = MemorySessionStore<Arc<GuessGame>>> {
    store: S,

    /// Games finished across all sessions since the process started.
    total_games: AtomicU64,
}

impl<S> GameCenter<S>
where
    S: SessionStore<Arc<GuessGame>>,
{
    /// Creates a game center over the given session store, with no games
    /// played yet.
    pub fn new(store: S) -> Self {
        Self {
            store,
            total_games: AtomicU64::new(0),
        }
    }

    /// Returns the underlying session store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the game for this session, starting one if there is none.
    ///
    /// A new game gets a random target. Calling this again before
    /// [`end`](Self::end) returns the same game (`Arc::ptr_eq` holds).
    ///
    /// # Errors
    /// Returns [`SessionError::MissingSession`] if `session` is `None`.
    pub fn get(
        &self,
        session: Option<&SessionId>,
    ) -> Result<Arc<GuessGame>, SessionError> {
        let session = session.ok_or(SessionError::MissingSession)?;

        let (game, created) = self
            .store
            .get_or_insert_with(session, GAME_ID, || Arc::new(GuessGame::new()));

        if created {
            tracing::debug!(session_id = %session, %game, "new game created");
        }
        Ok(game)
    }

    /// Ends this session's game: removes it from the session and counts it
    /// as played.
    ///
    /// The next [`get`](Self::get) for the session starts a fresh game.
    /// Every call counts once, whether or not a game was stored.
    ///
    /// # Errors
    /// Returns [`SessionError::MissingSession`] if `session` is `None`.
    pub fn end(&self, session: Option<&SessionId>) -> Result<(), SessionError> {
        let session = session.ok_or(SessionError::MissingSession)?;

        let removed = self.store.remove(session, GAME_ID);
        let total = self.total_games.fetch_add(1, Ordering::Relaxed) + 1;

        tracing::info!(
            session_id = %session,
            had_game = removed.is_some(),
            total,
            "game ended"
        );
        Ok(())
    }

    /// Returns how many games have been played since startup.
    pub fn total_games(&self) -> u64 {
        self.total_games.load(Ordering::Relaxed)
    }

    /// Returns a user-facing message about site-wide statistics.
    pub fn game_stats_message(&self) -> String {
        match self.total_games() {
            0 => NO_GAMES_MESSAGE.to_string(),
            1 => ONE_GAME_MESSAGE.to_string(),
            n => GAMES_PLAYED_FORMAT.replace("{}", &n.to_string()),
        }
    }
}

impl Default for GameCenter {
    fn default() -> Self {
        Self::new(MemorySessionStore::default())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for `GameCenter`.
    //!
    //! Naming convention: `test_{function}_{scenario}_{expected}`.

    use super::*;

    fn center() -> GameCenter {
        GameCenter::default()
    }

    // =====================================================================
    // get()
    // =====================================================================

    #[test]
    fn test_get_missing_session_returns_error() {
        let center = center();

        let result = center.get(None);

        assert!(matches!(result, Err(SessionError::MissingSession)));
    }

    #[test]
    fn test_get_new_session_creates_fresh_game() {
        let center = center();
        let id = center.store().open(None);

        let game = center.get(Some(&id)).expect("should create a game");

        assert!(game.is_game_beginning());
        assert!(center.store().get(&id, GAME_ID).is_some());
    }

    #[test]
    fn test_get_twice_returns_same_game() {
        let center = center();
        let id = center.store().open(None);

        let first = center.get(Some(&id)).unwrap();
        first.make_guess(0).unwrap();
        let second = center.get(Some(&id)).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.guesses_left(), first.guesses_left());
    }

    #[test]
    fn test_get_different_sessions_get_different_games() {
        let center = center();
        let a = center.store().open(None);
        let b = center.store().open(None);

        let game_a = center.get(Some(&a)).unwrap();
        let game_b = center.get(Some(&b)).unwrap();

        assert!(!Arc::ptr_eq(&game_a, &game_b));
    }

    // =====================================================================
    // end()
    // =====================================================================

    #[test]
    fn test_end_missing_session_returns_error_and_does_not_count() {
        let center = center();

        let result = center.end(None);

        assert!(matches!(result, Err(SessionError::MissingSession)));
        assert_eq!(center.total_games(), 0);
    }

    #[test]
    fn test_end_evicts_game_so_next_get_starts_fresh() {
        let center = center();
        let id = center.store().open(None);
        let old = center.get(Some(&id)).unwrap();
        old.make_guess(0).unwrap();

        center.end(Some(&id)).unwrap();
        let fresh = center.get(Some(&id)).unwrap();

        assert!(!Arc::ptr_eq(&old, &fresh));
        assert!(fresh.is_game_beginning());
    }

    #[test]
    fn test_end_leaves_no_reference_in_store() {
        let center = center();
        let id = center.store().open(None);
        let game = center.get(Some(&id)).unwrap();

        center.end(Some(&id)).unwrap();

        assert_eq!(Arc::strong_count(&game), 1);
        assert!(center.store().get(&id, GAME_ID).is_none());
    }

    // =====================================================================
    // game_stats_message()
    // =====================================================================

    #[test]
    fn test_game_stats_message_no_games() {
        assert_eq!(
            center().game_stats_message(),
            "No games has been played so far."
        );
    }

    #[test]
    fn test_game_stats_message_follows_count() {
        let center = center();
        let a = center.store().open(None);
        let b = center.store().open(None);

        center.end(Some(&a)).unwrap();
        assert_eq!(
            center.game_stats_message(),
            "One game has been played so far."
        );

        center.end(Some(&b)).unwrap();
        assert_eq!(
            center.game_stats_message(),
            "There have been 2 games played."
        );

        center.end(Some(&b)).unwrap();
        assert_eq!(
            center.game_stats_message(),
            "There have been 3 games played."
        );
    }
}
