//! Session storage: the contract the game center relies on, and an
//! in-memory implementation.
//!
//! The game center never looks inside a session. It only needs to get,
//! set and remove one attribute, and to ask whether a session is new.
//! That contract is the [`SessionStore`] trait, so the backing store can
//! be swapped (an in-memory map here, something shared in a deployment
//! with several processes) without touching game code.

use dashmap::DashMap;

use crate::session::Session;
use crate::{SessionConfig, SessionId};

/// Key-value attribute storage keyed by session.
///
/// # Trait bounds
///
/// - `Send + Sync` → one store is shared by every request handler, and
///   Tokio may run those on any worker thread.
pub trait SessionStore<T>: Send + Sync {
    /// Returns the attribute stored under `key`, if any.
    fn get(&self, id: &SessionId, key: &str) -> Option<T>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, id: &SessionId, key: &str, value: T);

    /// Removes and returns the attribute stored under `key`.
    fn remove(&self, id: &SessionId, key: &str) -> Option<T>;

    /// Returns `true` if the browser hasn't presented this session's id
    /// back yet (or the session doesn't exist).
    fn is_new(&self, id: &SessionId) -> bool;

    /// Returns the attribute under `key`, storing `init()` first if the
    /// slot is empty. The `bool` is `true` when `init` ran.
    ///
    /// The default does a separate `get` and `set`, so two racing callers
    /// can both initialize. Stores that can do better should override it.
    fn get_or_insert_with(
        &self,
        id: &SessionId,
        key: &str,
        init: impl FnOnce() -> T,
    ) -> (T, bool)
    where
        T: Clone,
    {
        if let Some(existing) = self.get(id, key) {
            return (existing, false);
        }
        let value = init();
        self.set(id, key, value.clone());
        (value, true)
    }
}

/// An in-process [`SessionStore`] backed by a `DashMap`.
///
/// `DashMap` shards its entries behind separate locks, so requests for
/// different sessions don't contend, while each session's record is
/// locked for the duration of a single operation.
///
/// ## Lifecycle
///
/// ```text
/// open(None) ──→ [new] ──open(Some(id))──→ [joined] ──idle timeout──→ expire_idle()
///                  │                           │                          │
///                  └──────── idle timeout ─────┴──────────────────────────▼
///                                                                     [removed]
/// ```
pub struct MemorySessionStore<T> {
    sessions: DashMap<SessionId, Session<T>>,
    config: SessionConfig,
}

impl<T> MemorySessionStore<T> {
    /// Creates an empty store with the given config.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            config,
        }
    }

    /// Resolves the session id a browser presented (usually from a cookie).
    ///
    /// - A known, live id is returned as-is and its "new" flag cleared.
    /// - An absent, unknown or idle-expired id starts a fresh session,
    ///   which is flagged new.
    pub fn open(&self, presented: Option<&str>) -> SessionId {
        if let Some(raw) = presented {
            let timeout = self.config.idle_timeout();
            if self
                .sessions
                .remove_if(raw, |_, session| session.is_idle(timeout))
                .is_some()
            {
                tracing::debug!(session_id = %raw, "presented session had expired");
            }

            // The `RefMut` must be dropped before touching the map again.
            if let Some(mut session) = self.sessions.get_mut(raw) {
                session.touch();
                return session.key().clone();
            }
        }

        let id = SessionId::generate();
        self.sessions.insert(id.clone(), Session::new());
        tracing::debug!(session_id = %id, "session created");
        id
    }

    /// Removes every session that has been idle past the configured
    /// timeout, dropping whatever it held. Returns the removed ids.
    ///
    /// Call this periodically. An expired game is abandoned, not counted
    /// as played.
    pub fn expire_idle(&self) -> Vec<SessionId> {
        let timeout = self.config.idle_timeout();
        let mut expired = Vec::new();

        self.sessions.retain(|id, session| {
            if session.is_idle(timeout) {
                expired.push(id.clone());
                false
            } else {
                true
            }
        });

        for id in &expired {
            tracing::info!(session_id = %id, "session expired (idle)");
        }
        expired
    }

    /// Returns `true` if a session with this id exists.
    pub fn contains(&self, id: &SessionId) -> bool {
        self.sessions.contains_key(id)
    }

    /// Returns the number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns `true` if there are no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl<T> Default for MemorySessionStore<T> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl<T> SessionStore<T> for MemorySessionStore<T>
where
    T: Clone + Send + Sync,
{
    fn get(&self, id: &SessionId, key: &str) -> Option<T> {
        self.sessions
            .get(id)
            .and_then(|session| session.attributes.get(key).cloned())
    }

    fn set(&self, id: &SessionId, key: &str, value: T) {
        self.sessions
            .entry(id.clone())
            .or_insert_with(Session::new)
            .attributes
            .insert(key.to_owned(), value);
    }

    fn remove(&self, id: &SessionId, key: &str) -> Option<T> {
        self.sessions
            .get_mut(id)
            .and_then(|mut session| session.attributes.remove(key))
    }

    fn is_new(&self, id: &SessionId) -> bool {
        self.sessions.get(id).is_none_or(|session| session.is_new)
    }

    /// Holds the session's shard lock across the check and the insert, so
    /// racing requests for one session agree on a single value.
    fn get_or_insert_with(
        &self,
        id: &SessionId,
        key: &str,
        init: impl FnOnce() -> T,
    ) -> (T, bool) {
        let mut session =
            self.sessions.entry(id.clone()).or_insert_with(Session::new);

        if let Some(existing) = session.attributes.get(key) {
            return (existing.clone(), false);
        }
        let value = init();
        session.attributes.insert(key.to_owned(), value.clone());
        (value, true)
    }
}
