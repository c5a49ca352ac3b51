//! # Admin Sessions
//!
//! Session gating for `/admin/*` is a single shared-secret check: a
//! correct password mints an opaque token held in an in-memory store and
//! handed to the browser as an HttpOnly cookie. The [`AdminSession`]
//! extractor validates the cookie; its rejection is a redirect to the
//! login page, so every admin handler gates itself by taking the
//! extractor as an argument.
//!
//! Tokens expire after the configured TTL. Expired entries are dropped
//! lazily on validation and whenever a new session is created.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Redirect;
use axum_extra::extract::cookie::CookieJar;
use parking_lot::RwLock;
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::state::AppState;

/// Name of the admin session cookie.
pub const SESSION_COOKIE: &str = "atelier_session";

/// Tracks a single active session.
#[derive(Debug)]
struct SessionEntry {
    expires_at: Instant,
}

/// Thread-safe store of active admin session tokens.
///
/// The lock is `parking_lot`, not `tokio::sync`, because it is never held
/// across an `.await` point and a panicking holder must not poison it.
#[derive(Debug, Clone)]
pub struct SessionStore {
    ttl: Duration,
    sessions: Arc<RwLock<HashMap<String, SessionEntry>>>,
}

impl SessionStore {
    /// Create an empty store with the given session lifetime.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Mint a new session token. Sweeps expired entries as a side effect.
    pub fn create(&self) -> String {
        let token = format!(
            "{}{}",
            Uuid::new_v4().simple(),
            Uuid::new_v4().simple()
        );
        let now = Instant::now();
        let mut sessions = self.sessions.write();
        sessions.retain(|_, entry| entry.expires_at > now);
        sessions.insert(
            token.clone(),
            SessionEntry {
                expires_at: now + self.ttl,
            },
        );
        token
    }

    /// Check whether a token names a live session. Removes it if expired.
    pub fn validate(&self, token: &str) -> bool {
        let now = Instant::now();
        let mut sessions = self.sessions.write();
        match sessions.get(token) {
            Some(entry) if entry.expires_at > now => true,
            Some(_) => {
                sessions.remove(token);
                false
            }
            None => false,
        }
    }

    /// Remove a session. Unknown tokens are a no-op.
    pub fn revoke(&self, token: &str) {
        self.sessions.write().remove(token);
    }

    /// Number of live (non-swept) entries.
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Constant-time comparison of the submitted admin password.
///
/// Prevents timing side-channels that could reveal password length or
/// prefix. When lengths differ, a dummy comparison keeps timing flat.
pub fn verify_admin_password(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();
    if provided.len() != expected.len() {
        let _ = expected.ct_eq(expected);
        return false;
    }
    provided.ct_eq(expected).into()
}

/// Proof that the request carries a live admin session.
///
/// Handlers gate themselves by taking this as an argument; requests
/// without a valid session cookie are redirected to the login form.
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// The validated session token, used by logout to revoke itself.
    pub token: String,
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        match jar.get(SESSION_COOKIE) {
            Some(cookie) if state.sessions.validate(cookie.value()) => Ok(Self {
                token: cookie.value().to_string(),
            }),
            _ => Err(Redirect::to("/admin/login")),
        }
    }
}
