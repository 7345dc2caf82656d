//! Auth session
//!
//! The token pair lives in one explicit session object: set on login, read
//! on every call, cleared on logout. Interior mutability lets the transport
//! hold a shared handle while login/logout mutate through `&self`.

use shared::client::TokenPair;
use std::sync::RwLock;

#[derive(Debug, Default)]
struct TokenState {
    access: Option<String>,
    refresh: Option<String>,
}

/// In-memory session holding the access/refresh token pair
#[derive(Debug, Default)]
pub struct Session {
    inner: RwLock<TokenState>,
}

impl Session {
    /// Create an empty, unauthenticated session
    pub fn new() -> Self {
        Self::default()
    }

    /// Store both tokens after a successful login
    pub fn set_tokens(&self, pair: &TokenPair) {
        let mut state = self.inner.write().expect("session lock poisoned");
        state.access = Some(pair.access.clone());
        state.refresh = Some(pair.refresh.clone());
    }

    /// Replace only the access token (after a refresh)
    pub fn set_access(&self, access: String) {
        let mut state = self.inner.write().expect("session lock poisoned");
        state.access = Some(access);
    }

    /// Clear both tokens on logout
    pub fn clear(&self) {
        let mut state = self.inner.write().expect("session lock poisoned");
        state.access = None;
        state.refresh = None;
    }

    /// Current access token, if authenticated
    pub fn access_token(&self) -> Option<String> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .access
            .clone()
    }

    /// Current refresh token, if any
    pub fn refresh_token(&self) -> Option<String> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .refresh
            .clone()
    }

    /// Whether an access token is present
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .expect("session lock poisoned")
            .access
            .is_some()
    }
}
