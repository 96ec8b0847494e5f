use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::http::HeaderMap;
use blackjack::{GameError, GameSession, RandomSource};
use log::info;

use crate::config::Config;
use crate::error::ApiError;

/// Header that selects a session; requests without it share the default table.
pub const SESSION_HEADER: &str = "x-session-id";
pub const DEFAULT_SESSION: &str = "default";

const MAX_SESSION_ID_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        let valid = !raw.is_empty()
            && raw.len() <= MAX_SESSION_ID_LEN
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(ApiError::InvalidSessionId(raw.to_string()))
        }
    }

    pub fn from_headers(headers: &HeaderMap) -> Result<Self, ApiError> {
        match headers.get(SESSION_HEADER) {
            None => Ok(Self::default()),
            Some(value) => {
                let raw = value
                    .to_str()
                    .map_err(|_| ApiError::InvalidSessionId(format!("{value:?}")))?;
                Self::parse(raw.trim())
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self(DEFAULT_SESSION.to_string())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub type SharedSession = Arc<Mutex<GameSession>>;

/// Builds the session for the n-th table opened by the registry.
pub type SessionFactory = Box<dyn Fn(usize) -> GameSession + Send + Sync>;

struct Entry {
    session: SharedSession,
    last_used: u64,
}

#[derive(Default)]
struct Sessions {
    entries: HashMap<SessionId, Entry>,
    clock: u64,
}

impl Sessions {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Least recently used session that is neither the default one nor in use.
    fn idle_victim(&self) -> Option<SessionId> {
        self.entries
            .iter()
            .filter(|(id, entry)| {
                id.as_str() != DEFAULT_SESSION && Arc::strong_count(&entry.session) == 1
            })
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(id, _)| id.clone())
    }
}

/// Owns every live game; each one is locked for the length of an operation.
///
/// When full, opening a new session evicts the least recently used idle one.
/// The default session is never evicted.
pub struct SessionRegistry {
    sessions: Mutex<Sessions>,
    opened: AtomicUsize,
    max_sessions: usize,
    factory: SessionFactory,
}

impl SessionRegistry {
    pub fn new(max_sessions: usize, factory: SessionFactory) -> Self {
        let registry = Self {
            sessions: Mutex::new(Sessions::default()),
            opened: AtomicUsize::new(0),
            max_sessions: max_sessions.max(1),
            factory,
        };
        let session = registry.open();
        {
            let mut sessions = lock(&registry.sessions);
            let last_used = sessions.tick();
            sessions
                .entries
                .insert(SessionId::default(), Entry { session, last_used });
        }
        registry
    }

    pub fn from_config(config: &Config) -> Self {
        let factory: SessionFactory = match config.seed {
            Some(seed) => Box::new(move |n| {
                GameSession::new(RandomSource::seeded(seed.wrapping_add(n as u64)))
            }),
            None => Box::new(|_| GameSession::default()),
        };
        Self::new(config.max_sessions, factory)
    }

    pub fn len(&self) -> usize {
        lock(&self.sessions).entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: &SessionId) -> bool {
        lock(&self.sessions).entries.contains_key(id)
    }

    /// Looks up a session, opening it on first use.
    pub fn get_or_create(&self, id: &SessionId) -> Result<SharedSession, ApiError> {
        let mut sessions = lock(&self.sessions);
        let now = sessions.tick();
        if let Some(entry) = sessions.entries.get_mut(id) {
            entry.last_used = now;
            return Ok(Arc::clone(&entry.session));
        }
        if sessions.entries.len() >= self.max_sessions {
            let victim = sessions
                .idle_victim()
                .ok_or(ApiError::SessionLimit(self.max_sessions))?;
            sessions.entries.remove(&victim);
            info!("Evicted idle session {victim} to make room for {id}");
        }
        let session = self.open();
        sessions.entries.insert(
            id.clone(),
            Entry {
                session: Arc::clone(&session),
                last_used: now,
            },
        );
        info!("Opened session {id} ({} live)", sessions.entries.len());
        Ok(session)
    }

    /// Runs one game operation with the session locked.
    pub fn with_session<T>(
        &self,
        id: &SessionId,
        op: impl FnOnce(&mut GameSession) -> Result<T, GameError>,
    ) -> Result<T, ApiError> {
        let session = self.get_or_create(id)?;
        let mut game = lock(&session);
        Ok(op(&mut game)?)
    }

    fn open(&self) -> SharedSession {
        let n = self.opened.fetch_add(1, Ordering::Relaxed);
        Arc::new(Mutex::new((self.factory)(n)))
    }
}

/// Game state is rolled back on failed operations, so a poisoned lock still
/// guards consistent data.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionRegistry>,
}

impl AppState {
    pub fn new(sessions: SessionRegistry) -> Self {
        Self {
            sessions: Arc::new(sessions),
        }
    }
}
