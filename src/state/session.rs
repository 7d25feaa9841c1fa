//! Auth session for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is passed explicitly to the route guard and to every page that
//! needs identity, as an `RwSignal<SessionStore<_>>` prop. The network side of
//! login is injected through [`AuthClient`], persistence through
//! [`SessionStorage`].
//!
//! INVARIANTS
//! ==========
//! - A [`Session`] can only be built from a token whose claims decode, so the
//!   role never exists without the token it came from.
//! - Memory and storage change together: `commit` writes both keys, `logout`
//!   removes both.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

use super::claims::{ClaimsError, Role, decode_claims};
use crate::net::error::ApiError;
use crate::net::types::{Credentials, TokenResponse};
use crate::util::storage::{BrowserStorage, SessionStorage};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("login request failed: {0}")]
    Api(#[from] ApiError),
    #[error("malformed access token: {0}")]
    Token(#[from] ClaimsError),
}

/// Capability to exchange credentials for an access token.
#[allow(async_fn_in_trait)]
pub trait AuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError>;
}

/// Opaque bearer credential. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

/// An authenticated identity: a token plus what its claims say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: BearerToken,
    role: Role,
    subject: Option<String>,
}

impl Session {
    /// Build a session by decoding `token`'s claims.
    ///
    /// # Errors
    ///
    /// Returns [`ClaimsError`] if the token carries no readable role claim.
    pub fn from_token(token: impl Into<String>) -> Result<Self, ClaimsError> {
        let token = token.into();
        let claims = decode_claims(&token)?;
        Ok(Self { token: BearerToken(token), role: claims.role, subject: claims.subject })
    }

    pub fn token(&self) -> &BearerToken {
        &self.token
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }
}

/// Call the auth endpoint and decode the returned token.
///
/// Touches no state, so the UI can await it without holding the session
/// signal; apply the result with [`SessionStore::commit`].
///
/// # Errors
///
/// Returns [`SessionError::Api`] when the endpoint rejects the credentials or
/// is unreachable, and [`SessionError::Token`] when the token is malformed.
pub async fn authenticate<A: AuthClient>(client: &A, credentials: &Credentials) -> Result<Session, SessionError> {
    let response = client.login(credentials).await?;
    Ok(Session::from_token(response.access_token)?)
}

/// In-memory session mirrored to persistent storage.
#[derive(Debug, Clone)]
pub struct SessionStore<S = BrowserStorage> {
    current: Option<Session>,
    storage: S,
}

/// The store as wired into the browser app.
pub type AppSession = SessionStore<BrowserStorage>;

impl<S: SessionStorage> SessionStore<S> {
    /// Rebuild the session persisted in `storage`, if any.
    ///
    /// The role is re-derived from the stored token. A token that no longer
    /// decodes is dropped along with its role.
    pub fn restore(storage: S) -> Self {
        let mut store = Self { current: None, storage };
        let Some(raw) = store.storage.get(TOKEN_KEY) else {
            store.storage.remove(ROLE_KEY);
            return store;
        };
        match Session::from_token(raw) {
            Ok(session) => {
                if store.storage.get(ROLE_KEY).as_deref() != Some(session.role.as_str()) {
                    store.storage.set(ROLE_KEY, session.role.as_str());
                }
                log::debug!("session restored: role={}", session.role);
                store.current = Some(session);
            }
            Err(err) => {
                log::warn!("discarding persisted token: {err}");
                store.clear_storage();
            }
        }
        store
    }

    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn token(&self) -> Option<&BearerToken> {
        self.current.as_ref().map(Session::token)
    }

    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().map(Session::role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Make `session` current and persist it.
    pub fn commit(&mut self, session: Session) {
        log::info!("logged in: user={} role={}", session.subject().unwrap_or("-"), session.role);
        self.storage.set(TOKEN_KEY, session.token.as_str());
        self.storage.set(ROLE_KEY, session.role.as_str());
        self.current = Some(session);
    }

    /// Authenticate and commit in one step.
    ///
    /// On failure the previous session, if any, is left untouched.
    ///
    /// # Errors
    ///
    /// Propagates [`authenticate`] errors.
    pub async fn login<A: AuthClient>(&mut self, client: &A, username: &str, password: &str) -> Result<Role, SessionError> {
        let credentials = Credentials { username: username.to_owned(), password: password.to_owned() };
        let session = authenticate(client, &credentials).await?;
        let role = session.role;
        self.commit(session);
        Ok(role)
    }

    /// Drop the session from memory and storage. No server call.
    pub fn logout(&mut self) {
        self.current = None;
        self.clear_storage();
    }

    fn clear_storage(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(ROLE_KEY);
    }
}
