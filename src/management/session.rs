use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

use crate::{
    spotify::SpotifyClient,
    types::{PlaylistSummary, Token, UserProfile},
};

/// Name of the browser cookie carrying the opaque session identifier.
pub const SESSION_COOKIE: &str = "spinlist_session";

/// State tied to one browser session. Created empty on the first page load,
/// mutated by the auth flow and the action handlers, and discarded on logout
/// or on an unrecoverable API error.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub token: Option<Token>,
    pub client: Option<SpotifyClient>,
    pub user: Option<UserProfile>,
    pub playlist: Option<PlaylistSummary>,
    pub last_code: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Whether an authorization code from the URL should be exchanged.
    ///
    /// Exchanges happen only while no token is held, and never twice for the
    /// same code: codes are single-use, and a stored token must never be
    /// clobbered by a replayed redirect URL.
    pub fn should_exchange(&self, code: &str) -> bool {
        self.token.is_none() && self.last_code.as_deref() != Some(code)
    }

    /// Records a code as processed, successfully or not.
    pub fn mark_code(&mut self, code: &str) {
        self.last_code = Some(code.to_string());
    }

    /// Stores a fresh token and the client handle derived from it. Used both
    /// after the initial code exchange and after a refresh grant.
    pub fn install_token(&mut self, token: Token) {
        self.client = Some(SpotifyClient::new(&token.access_token));
        self.token = Some(token);
    }
}

/// Process-local store of all live sessions, keyed by the cookie value.
///
/// Shared state behind an async mutex: the handle is cheap to clone and is
/// handed to every handler through an axum `Extension`. Handlers clone a
/// session out, work
/// on it, and write it back; renders within one browser session are
/// serialized by the browser itself, so the brief unlocked window does not
/// interleave mutations of the same session.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<String, Session>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the session for `id`, creating an empty one first
    /// if this is the first request of the browser session.
    pub async fn load_or_create(&self, id: &str) -> Session {
        let mut sessions = self.sessions.lock().await;
        sessions.entry(id.to_string()).or_default().clone()
    }

    /// Writes a mutated session back into the store.
    pub async fn save(&self, id: &str, session: Session) {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(id.to_string(), session);
    }

    /// Drops the session outright so the store never accumulates logged-out
    /// entries. The cookie keeps working: the next request re-creates an
    /// empty session under the same id.
    pub async fn reset(&self, id: &str) {
        let mut sessions = self.sessions.lock().await;
        sessions.remove(id);
    }

    /// Number of sessions currently held, logged-in or not.
    pub async fn count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
