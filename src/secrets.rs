//! Secret operations
//!
//! [`SecretsService`] covers the key/value part of the API: listing keys,
//! fetching a secret's current version, and creating, updating or deleting
//! secrets. Every operation validates its input before anything is sent.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::Method;

use crate::endpoints::SecretsEndpoints;
use crate::errors::{Error, ErrorKind, Result};
use crate::models::{Secret, Secrets, UserSecret};
use crate::transport::Transport;

/// Secrets part of the API
///
/// Obtained from [`Client::secrets`](crate::Client::secrets); all methods go
/// through the client's shared transport.
#[derive(Debug, Clone)]
pub struct SecretsService {
    endpoints: SecretsEndpoints,
    transport: Arc<Transport>,
}

impl SecretsService {
    pub(crate) fn new(base_url: &str, transport: Arc<Transport>) -> Self {
        Self {
            endpoints: SecretsEndpoints::new(base_url),
            transport,
        }
    }

    /// List all stored secrets
    ///
    /// Returns key names and metadata only; values are fetched per key with
    /// [`get`](Self::get).
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use secretsmanager_sdk::Client;
    /// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let secrets = client.secrets().list().await?;
    /// for key in &secrets.keys {
    ///     println!("{} ({})", key.name, key.metadata.created_at);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self) -> Result<Secrets> {
        let body = self
            .transport
            .execute(Method::GET, &self.endpoints.list(), None)
            .await?;
        serde_json::from_slice(&body)
            .map_err(|e| Error::new(ErrorKind::CannotUnmarshalBody, e.to_string()))
    }

    /// Fetch a secret with its current version
    ///
    /// The value comes back base64-encoded, exactly as stored. Fails with
    /// [`ErrorKind::EmptySecretName`] before any network call if `key` is
    /// empty.
    pub async fn get(&self, key: &str) -> Result<Secret> {
        if key.is_empty() {
            return Err(empty_key());
        }

        let body = self
            .transport
            .execute(Method::GET, &self.endpoints.secret(key), None)
            .await?;
        serde_json::from_slice(&body)
            .map_err(|e| Error::new(ErrorKind::CannotUnmarshalBody, e.to_string()))
    }

    /// Store a new secret
    ///
    /// The raw value is base64-encoded before upload, so callers pass it as
    /// is. Fails with [`ErrorKind::EmptySecretName`] or
    /// [`ErrorKind::EmptySecretValue`] before any network call when the
    /// respective field is empty.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use secretsmanager_sdk::{Client, UserSecret};
    /// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
    /// client
    ///     .secrets()
    ///     .create(UserSecret {
    ///         key: "db/password".to_string(),
    ///         description: Some("primary database".to_string()),
    ///         value: "hunter2".to_string(),
    ///     })
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, mut secret: UserSecret) -> Result<()> {
        if secret.key.is_empty() {
            return Err(empty_key());
        }
        if secret.value.is_empty() {
            return Err(Error::new(
                ErrorKind::EmptySecretValue,
                "secret value is empty",
            ));
        }
        secret.value = STANDARD.encode(&secret.value);

        let url = self.endpoints.secret(&secret.key);
        let body = serde_json::to_vec(&secret)
            .map_err(|e| Error::new(ErrorKind::CannotMarshalSecret, e.to_string()))?;
        let _ = self.transport.execute(Method::POST, &url, Some(body)).await?;
        Ok(())
    }

    /// Replace an existing secret
    ///
    /// Unlike [`create`](Self::create) the value is sent exactly as
    /// provided, so pass it base64-encoded when the backend expects that.
    /// Fails with [`ErrorKind::EmptySecretName`] if the key is empty.
    pub async fn update(&self, secret: UserSecret) -> Result<()> {
        if secret.key.is_empty() {
            return Err(empty_key());
        }

        let url = self.endpoints.secret(&secret.key);
        let body = serde_json::to_vec(&secret)
            .map_err(|e| Error::new(ErrorKind::CannotMarshalSecret, e.to_string()))?;
        let _ = self.transport.execute(Method::PUT, &url, Some(body)).await?;
        Ok(())
    }

    /// Delete a secret and all its versions
    ///
    /// Fails with [`ErrorKind::EmptySecretName`] if the key is empty.
    pub async fn delete(&self, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(empty_key());
        }

        let _ = self
            .transport
            .execute(Method::DELETE, &self.endpoints.secret(key), None)
            .await?;
        Ok(())
    }
}

fn empty_key() -> Error {
    Error::new(ErrorKind::EmptySecretName, "secret key is empty")
}
