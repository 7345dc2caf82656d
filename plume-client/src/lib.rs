//! Plume Client - HTTP client for the storefront admin API
//!
//! Provides a typed, session-aware client for the storefront REST API and
//! the network half of the Product Variant Composer (load, import, submit,
//! batch upload).

pub mod api;
pub mod composer;
pub mod config;
pub mod error;
pub mod session;
pub mod transport;

pub use api::{AdminClient, UploadOutcome};
pub use composer::{FormContext, MAX_PAYLOAD_BYTES};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use session::Session;
pub use transport::{HttpTransport, NetworkTransport};

// Re-export shared types for convenience
pub use shared::client::{AccessToken, CurrentUser, LoginRequest, TokenPair};
pub use shared::draft::{ImportAxis, ProductDraft, VariantAxis, VariantEntry};
