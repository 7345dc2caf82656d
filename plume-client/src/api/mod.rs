//! Typed API surface
//!
//! `AdminClient` groups the storefront admin endpoints by resource. It is
//! generic over [`HttpTransport`] so tests can drive it with an in-memory
//! transport instead of the network.

mod auth;
mod categories;
mod collections;
mod filters;
mod hero_slides;
mod orders;
mod products;
mod reviews;
mod settings;
mod uploads;

pub use uploads::UploadOutcome;

use crate::{ClientConfig, ClientResult, HttpTransport, NetworkTransport, Session, TokenPair};
use std::sync::Arc;

/// Typed client for the storefront admin API
#[derive(Debug)]
pub struct AdminClient<T: HttpTransport> {
    transport: T,
    session: Arc<Session>,
}

impl AdminClient<NetworkTransport> {
    /// Build a network-backed client from configuration
    pub fn connect(config: ClientConfig) -> ClientResult<Self> {
        let session = Arc::new(Session::new());

        match (config.access_token, config.refresh_token) {
            (Some(access), Some(refresh)) => session.set_tokens(&TokenPair { access, refresh }),
            (Some(access), None) => session.set_access(access),
            _ => {}
        }

        let transport = NetworkTransport::new(&config.base_url, config.timeout, session.clone())?;

        Ok(Self { transport, session })
    }
}

impl<T: HttpTransport> AdminClient<T> {
    /// Build a client around an existing transport and a fresh session
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            session: Arc::new(Session::new()),
        }
    }

    /// Auth session backing this client
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Underlying transport, exposed for call inspection in tests
    pub fn transport(&self) -> &T {
        &self.transport
    }
}
