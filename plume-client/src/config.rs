//! Client configuration

/// Client configuration for connecting to the storefront admin API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "https://api.example.com")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Access token to seed the session with (e.g., restored from a
    /// previous run)
    pub access_token: Option<String>,

    /// Refresh token to seed the session with
    pub refresh_token: Option<String>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            access_token: None,
            refresh_token: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Seed the session with an existing token pair
    pub fn with_tokens(mut self, access: impl Into<String>, refresh: impl Into<String>) -> Self {
        self.access_token = Some(access.into());
        self.refresh_token = Some(refresh.into());
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}
