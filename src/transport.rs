//! Authenticated request execution
//!
//! One primitive lives here: [`Transport::execute`] performs a single
//! authenticated HTTP exchange and hands back either the raw response body
//! or an error classified per the backend contract. Domain services decode
//! the bytes; the transport never parses success bodies.

use std::time::Duration;

use bytes::Bytes;
use reqwest::{header, Client as HttpClient, Method, Response, StatusCode};
use tracing::{debug, warn};

use crate::auth::Auth;
use crate::errors::{Error, ErrorKind, ErrorResponse, Result, AUTH_TOKEN_UNAUTHORIZED_DESC};

const USER_AGENT_PREFIX: &str = "secretsmanager-sdk-rust";

/// Request executor shared by both domain services
///
/// Owns the connection pool and the credential. Everything here is immutable
/// after construction, so any number of tasks may call
/// [`Transport::execute`] concurrently without coordination.
#[derive(Debug)]
pub struct Transport {
    http: HttpClient,
    auth: Auth,
    user_agent: String,
}

impl Transport {
    /// Create a transport from a credential
    ///
    /// Without a custom client the pooled defaults from the crate root
    /// constants apply; a supplied `custom_client` replaces the transport
    /// configuration wholesale, no merging.
    pub fn new(auth: Auth, custom_client: Option<HttpClient>) -> Result<Self> {
        let http = match custom_client {
            Some(http) => http,
            None => default_http_client()?,
        };
        Ok(Self {
            http,
            auth,
            user_agent: format!("{}/{}", USER_AGENT_PREFIX, crate::VERSION),
        })
    }

    /// Perform one authenticated exchange
    ///
    /// Exactly three headers go out on every request: `X-Auth-Token`,
    /// `Content-Type: application/json` and the SDK `User-Agent`. The
    /// response body is fully consumed on every path, success or failure, so
    /// the pooled connection is always returned. Dropping the returned
    /// future aborts the exchange.
    ///
    /// Outcome mapping:
    /// - transport-level failure (DNS, connect, TLS, deadline) ->
    ///   [`ErrorKind::InternalAppError`]
    /// - 401 -> [`ErrorKind::AuthTokenUnauthorized`], body ignored
    /// - other >= 400 -> kind classified from the error envelope
    /// - otherwise -> the raw body bytes
    pub async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Bytes> {
        debug!("sending {} request to {}", method, url);

        let mut builder = self
            .http
            .request(method, url)
            .header("X-Auth-Token", self.auth.token_value())
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::USER_AGENT, &self.user_agent);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::new(ErrorKind::InternalAppError, e.to_string()))?;

        read_response(response).await
    }
}

/// Apply the status policy and drain the body.
async fn read_response(response: Response) -> Result<Bytes> {
    let status = response.status();

    // 401 bodies are not guaranteed to carry the error envelope; never
    // parse them.
    if status == StatusCode::UNAUTHORIZED {
        warn!("backend rejected the auth token");
        return Err(Error::new(
            ErrorKind::AuthTokenUnauthorized,
            AUTH_TOKEN_UNAUTHORIZED_DESC,
        ));
    }

    if status.as_u16() >= 400 {
        return Err(classify_error_response(response).await);
    }

    response
        .bytes()
        .await
        .map_err(|e| Error::new(ErrorKind::CannotReadBody, e.to_string()))
}

/// Decode the error envelope of a failed response and map its
/// `status_text` through the registry.
async fn classify_error_response(response: Response) -> Error {
    let status = response.status();

    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => return Error::new(ErrorKind::CannotReadBody, e.to_string()),
    };

    let envelope: ErrorResponse = match serde_json::from_slice(&body) {
        Ok(envelope) => envelope,
        Err(e) => {
            return Error::new(
                ErrorKind::InternalAppError,
                format!("cannot decode error response: {}", e),
            )
        }
    };

    match ErrorKind::from_status_text(&envelope.status_text) {
        Some(kind) => {
            debug!("classified {} response as {}", status, kind);
            Error::new(kind, envelope.error_text)
        }
        None => {
            warn!(
                "unrecognized status text {:?} in {} response",
                envelope.status_text, status
            );
            Error::new(
                ErrorKind::Unknown,
                format!("unhandled backend status text: {}", envelope.status_text),
            )
        }
    }
}

fn default_http_client() -> Result<HttpClient> {
    HttpClient::builder()
        .timeout(Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(crate::DEFAULT_CONNECT_TIMEOUT_SECS))
        .pool_max_idle_per_host(crate::DEFAULT_MAX_IDLE_CONNS)
        .pool_idle_timeout(Duration::from_secs(crate::DEFAULT_IDLE_CONN_TIMEOUT_SECS))
        .build()
        .map_err(|e| {
            Error::new(
                ErrorKind::InternalAppError,
                format!("failed to build HTTP client: {}", e),
            )
        })
}
