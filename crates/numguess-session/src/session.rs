//! Session types: the identifier a browser carries and the server's record
//! behind it.
//!
//! A "session" is the server's memory of one browser. It tracks:
//! - WHO it is (an opaque, unguessable [`SessionId`])
//! - WHAT it holds (named attribute slots, e.g. the current game)
//! - WHETHER the browser has presented the id back yet (the "new" flag)
//! - WHEN it was last used (so idle sessions can be expired)

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use rand::Rng;

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Configuration for session behavior.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// How long (in seconds) a session may sit unused before it is
    /// expired and its game discarded.
    ///
    /// Default: 1800 seconds (30 minutes).
    pub idle_timeout_secs: u64,
}

impl SessionConfig {
    pub(crate) fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: 1800,
        }
    }
}

// ---------------------------------------------------------------------------
// SessionId
// ---------------------------------------------------------------------------

/// An opaque session identifier.
///
/// Generated ids are 32 lowercase hex characters (128 random bits), so
/// guessing another browser's id is infeasible. The web layer sends it to
/// the browser in a cookie and reads it back on every request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        let bytes: [u8; 16] = rand::rng().random();
        Self(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    /// Returns the id as a string slice (e.g. for a cookie value).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

/// Lets a `DashMap<SessionId, _>` be queried with the raw `&str` a client
/// presented, without allocating a `SessionId` first.
impl Borrow<str> for SessionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// The server's record for one browser session.
#[derive(Debug)]
pub(crate) struct Session<T> {
    pub(crate) attributes: HashMap<String, T>,

    /// `true` until the browser presents the id back on a later request.
    pub(crate) is_new: bool,

    pub(crate) last_access: Instant,
}

impl<T> Session<T> {
    pub(crate) fn new() -> Self {
        Self {
            attributes: HashMap::new(),
            is_new: true,
            last_access: Instant::now(),
        }
    }

    /// Returns `true` if the session has been idle for at least `timeout`.
    pub(crate) fn is_idle(&self, timeout: Duration) -> bool {
        self.last_access.elapsed() >= timeout
    }

    /// Records that the browser came back with this session's id.
    pub(crate) fn touch(&mut self) {
        self.is_new = false;
        self.last_access = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_32_lowercase_hex_chars() {
        let id = SessionId::generate();
        assert_eq!(id.as_str().len(), 32);
        assert!(
            id.as_str()
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_generate_ids_are_unique() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }

    #[test]
    fn test_new_session_is_new_until_touched() {
        let mut session: Session<u8> = Session::new();
        assert!(session.is_new);

        session.touch();

        assert!(!session.is_new);
    }

    #[test]
    fn test_is_idle_zero_timeout_is_always_idle() {
        let session: Session<u8> = Session::new();
        assert!(session.is_idle(Duration::ZERO));
        assert!(!session.is_idle(Duration::from_secs(3600)));
    }

    #[test]
    fn test_session_config_default() {
        assert_eq!(SessionConfig::default().idle_timeout_secs, 1800);
    }
}
