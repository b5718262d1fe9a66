//! Secrets Manager SDK for Rust
//!
//! An SDK for a cloud secrets-manager service: key/value secrets plus
//! managed X.509 certificates, all behind one authenticated client.
//!
//! # Features
//!
//! - Async/await support with the tokio runtime
//! - Token credential kept out of logs and debug output
//! - One shared connection pool across both APIs
//! - Closed error taxonomy callers can branch on
//! - Secrets: list, get, create, update, delete
//! - Certificates: upload, rotate versions, rename, consumers, CA chain,
//!   private key and PKCS#12 downloads
//!
//! # Example
//!
//! ```no_run
//! use secretsmanager_sdk::{Auth, Client, UserSecret};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder()
//!         .auth(Auth::token("gAAAAAB-example-session-token")?)
//!         .build()?;
//!
//!     client
//!         .secrets()
//!         .create(UserSecret {
//!             key: "db/password".to_string(),
//!             description: None,
//!             value: "hunter2".to_string(),
//!         })
//!         .await?;
//!
//!     let secret = client.secrets().get("db/password").await?;
//!     println!("stored as base64: {}", secret.version.value);
//!
//!     Ok(())
//! }
//! ```

#![deny(missing_docs, missing_debug_implementations, unsafe_code)]

mod auth;
mod certs;
mod client;
mod config;
mod endpoints;
mod errors;
mod models;
mod secrets;
mod transport;

pub use auth::Auth;
pub use certs::CertificatesService;
pub use client::Client;
pub use config::{ClientBuilder, ClientConfig};
pub use errors::{Error, ErrorKind, Result};
pub use models::*;
pub use secrets::SecretsService;

// Re-export commonly used types
pub use secrecy::SecretString;

/// SDK version, matches Cargo.toml version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default secrets API base URL
pub const DEFAULT_SECRETS_API_URL: &str = "https://cloud.api.example.com/secrets-manager/v1/";

/// Default certificates API base URL
pub const DEFAULT_CERTIFICATES_API_URL: &str =
    "https://cloud.api.example.com/certificate-manager/v1/";

/// Default total request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default connect timeout in seconds, covering DNS, TCP and TLS setup
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 60;

/// Default maximum number of pooled idle connections per host
pub const DEFAULT_MAX_IDLE_CONNS: usize = 100;

/// Default idle connection timeout in seconds
pub const DEFAULT_IDLE_CONN_TIMEOUT_SECS: u64 = 100;
