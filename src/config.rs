use reqwest::Client as HttpClient;

use crate::auth::Auth;
use crate::errors::{Error, ErrorKind, Result};

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the secrets API
    pub secrets_api_url: String,
    /// Base URL of the certificates API
    pub certificates_api_url: String,
    /// Credential attached to every request
    pub auth: Auth,
    /// Custom HTTP client; when set it replaces the default transport
    /// wholesale, including its timeouts and pool settings
    pub http_client: Option<HttpClient>,
}

/// Builder for creating a configured [`Client`](crate::Client)
#[derive(Debug, Default)]
pub struct ClientBuilder {
    secrets_api_url: Option<String>,
    certificates_api_url: Option<String>,
    auth: Option<Auth>,
    http_client: Option<HttpClient>,
}

impl ClientBuilder {
    /// Create a builder pointed at the default API URLs
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the credential (required)
    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Override the secrets API base URL
    pub fn secrets_api_url(mut self, url: impl Into<String>) -> Self {
        self.secrets_api_url = Some(url.into());
        self
    }

    /// Override the certificates API base URL
    pub fn certificates_api_url(mut self, url: impl Into<String>) -> Self {
        self.certificates_api_url = Some(url.into());
        self
    }

    /// Use a custom `reqwest` client instead of the pooled defaults
    ///
    /// No merging happens: the custom client's own timeouts and pool
    /// settings apply as configured.
    pub fn http_client(mut self, http_client: HttpClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Build the client with the configured options
    ///
    /// Fails with [`ErrorKind::NoAuthOpts`] when no credential was
    /// supplied; a client never exists without one.
    pub fn build(self) -> Result<crate::Client> {
        let auth = self.auth.ok_or_else(|| {
            Error::new(
                ErrorKind::NoAuthOpts,
                "no authentication options were provided",
            )
        })?;

        let config = ClientConfig {
            secrets_api_url: self
                .secrets_api_url
                .unwrap_or_else(|| crate::DEFAULT_SECRETS_API_URL.to_string()),
            certificates_api_url: self
                .certificates_api_url
                .unwrap_or_else(|| crate::DEFAULT_CERTIFICATES_API_URL.to_string()),
            auth,
            http_client: self.http_client,
        };

        crate::client::Client::new(config)
    }
}
