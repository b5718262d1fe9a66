//! Client composition
//!
//! [`Client`] resolves a [`ClientConfig`](crate::ClientConfig) into one
//! shared transport and hands it to the two domain services. Construction
//! happens once; afterwards everything is immutable and the client can be
//! cloned or shared across tasks freely.
//!
//! # Examples
//!
//! ```no_run
//! use secretsmanager_sdk::{Auth, Client};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::builder()
//!     .auth(Auth::token("gAAAAAB-example-session-token")?)
//!     .build()?;
//!
//! let secrets = client.secrets().list().await?;
//! println!("{} secrets stored", secrets.keys.len());
//!
//! for cert in client.certificates().list().await? {
//!     println!("{} expires {}", cert.name, cert.validity.not_after);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::certs::CertificatesService;
use crate::config::{ClientBuilder, ClientConfig};
use crate::errors::Result;
use crate::secrets::SecretsService;
use crate::transport::Transport;

/// Entry point to the secrets and certificates APIs
///
/// Both services share one transport, so one connection pool and one
/// credential serve every request this client makes.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) config: ClientConfig,
    secrets: SecretsService,
    certificates: CertificatesService,
}

impl Client {
    /// Create a new client with the given configuration
    pub(crate) fn new(config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(Transport::new(
            config.auth.clone(),
            config.http_client.clone(),
        )?);
        let secrets = SecretsService::new(&config.secrets_api_url, Arc::clone(&transport));
        let certificates = CertificatesService::new(&config.certificates_api_url, transport);

        Ok(Self {
            config,
            secrets,
            certificates,
        })
    }

    /// Start building a client
    ///
    /// Shorthand for [`ClientBuilder::new`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Access the secrets part of the API
    pub fn secrets(&self) -> &SecretsService {
        &self.secrets
    }

    /// Access the certificates part of the API
    pub fn certificates(&self) -> &CertificatesService {
        &self.certificates
    }
}
