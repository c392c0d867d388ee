use std::collections::HashMap;
use std::fmt;

use tracing::info;

use super::{Session, SessionConfig, SessionError};

/// Caller-chosen session key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Isolated sessions keyed by [`SessionId`].
///
/// Sessions never share a leaderboard or an RNG. With a fixed base seed,
/// each session's seed is derived from the base seed and its id, so the
/// same id always replays the same random targets.
#[derive(Debug)]
pub struct SessionRegistry {
    config: SessionConfig,
    sessions: HashMap<SessionId, Session>,
}

impl SessionRegistry {
    /// Registry whose sessions start from `config`.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            sessions: HashMap::new(),
        }
    }

    /// Return the session for `id`, creating it on first use.
    pub fn open(&mut self, id: impl Into<SessionId>) -> &mut Session {
        let id = id.into();
        let config = &self.config;
        self.sessions.entry(id).or_insert_with_key(|id| {
            let mut session_config = config.clone();
            session_config.seed = config.seed.map(|seed| derive_seed(seed, id));
            info!(session = %id, "opened session");
            Session::new(id.clone(), session_config)
        })
    }

    /// Borrow an existing session.
    pub fn get(&self, id: &SessionId) -> Option<&Session> {
        self.sessions.get(id)
    }

    /// Mutably borrow an existing session.
    pub fn get_mut(&mut self, id: &SessionId) -> Result<&mut Session, SessionError> {
        self.sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::UnknownSession(id.clone()))
    }

    /// Drop a session and its leaderboard.
    pub fn close(&mut self, id: &SessionId) -> Result<Session, SessionError> {
        let session = self
            .sessions
            .remove(id)
            .ok_or_else(|| SessionError::UnknownSession(id.clone()))?;
        info!(session = %id, entries = session.leaderboard().len(), "closed session");
        Ok(session)
    }

    /// Number of open sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session is open.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Mix the base seed with the session id through BLAKE3.
fn derive_seed(base: u64, id: &SessionId) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&base.to_le_bytes());
    hasher.update(id.as_str().as_bytes());
    let digest = hasher.finalize();

    let mut seed = [0u8; 8];
    seed.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(seed)
}
