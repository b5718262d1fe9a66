//! Error types for the Secrets Manager SDK
//!
//! Every failure surfaces as a single [`Error`] value carrying a kind from
//! the closed [`ErrorKind`] taxonomy plus a human-readable description.
//! Callers branch on the kind, never on the description text.
//!
//! # Example
//!
//! ```no_run
//! # use secretsmanager_sdk::{Client, ErrorKind};
//! # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
//! match client.secrets().get("db/password").await {
//!     Ok(secret) => println!("got version {}", secret.version.version_id),
//!     Err(e) if e.is(ErrorKind::NotFound) => println!("no such secret"),
//!     Err(e) if e.is(ErrorKind::AuthTokenUnauthorized) => println!("token rejected"),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use thiserror::Error as ThisError;

/// Result type alias for the SDK
pub type Result<T> = std::result::Result<T, Error>;

/// Fixed description attached to every 401 response.
pub(crate) const AUTH_TOKEN_UNAUTHORIZED_DESC: &str = "X-Auth-Token is unauthorized";

/// Main error type for the SDK
#[derive(ThisError, Debug, Clone)]
#[error("{kind}: {description}")]
pub struct Error {
    kind: ErrorKind,
    description: String,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, description: impl Into<String>) -> Self {
        Error {
            kind,
            description: description.into(),
        }
    }

    /// Get the error kind for branching
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the human-readable description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Check whether the error carries the given kind
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Check if the error is worth retrying
    ///
    /// The SDK never retries on its own; this is a hint for callers that do.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InternalError | ErrorKind::TooManyRequests | ErrorKind::InternalAppError
        )
    }
}

/// Closed taxonomy of everything that can go wrong
///
/// Each kind carries a stable diagnostic token (see [`ErrorKind::as_str`]);
/// the backend-classified kinds additionally match the `status_text` tokens
/// the backend puts in its error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No authentication options were supplied to the builder
    NoAuthOpts,
    /// The supplied authentication material was unusable (e.g. empty token)
    NoAuthMethod,
    /// The backend rejected the auth token with a 401
    AuthTokenUnauthorized,
    /// A secret operation was called with an empty key
    EmptySecretName,
    /// Secret creation was called with an empty value
    EmptySecretValue,
    /// A certificate operation was called with an empty id
    EmptyCertificateId,
    /// Certificate creation or rename was called with an empty name
    EmptyCertificateName,
    /// A PEM bundle was supplied without any certificates
    EmptyPemCertificates,
    /// A PEM bundle was supplied without a private key
    EmptyPemPrivateKey,
    /// A secret request body could not be serialized
    CannotMarshalSecret,
    /// A certificate request body could not be serialized
    CannotMarshalCertificate,
    /// Transport-level failure: DNS, connect, TLS, cancellation, or an
    /// error envelope that could not be decoded
    InternalAppError,
    /// A response body could not be read
    CannotReadBody,
    /// A response body did not match the expected shape
    CannotUnmarshalBody,
    /// Backend: malformed request (`INCORRECT_REQUEST`)
    BadRequest,
    /// Backend: internal server error (`INTERNAL_SERVER_ERROR`)
    InternalError,
    /// Backend: caller is not authenticated (`UNAUTHORIZED`)
    Unauthorized,
    /// Backend: caller is not allowed to do this (`FORBIDDEN`)
    Forbidden,
    /// Backend: quota exceeded (`OVER_QUOTAS`)
    OverQuota,
    /// Backend: no such resource (`NOT_FOUND`)
    NotFound,
    /// Backend: resource already exists or is in a conflicting state
    /// (`CONFLICT`)
    Conflict,
    /// Backend: rate limited (`TOO_MANY_REQUESTS`)
    TooManyRequests,
    /// Backend: method not allowed on this resource (`NOT_ALLOWED`)
    MethodNotAllowed,
    /// Backend returned a `status_text` outside the registered set
    Unknown,
}

/// Immutable `status_text` -> kind registry, populated once before first
/// lookup and read-only afterwards.
static STATUS_TEXT_KINDS: OnceLock<HashMap<&'static str, ErrorKind>> = OnceLock::new();

fn status_text_kinds() -> &'static HashMap<&'static str, ErrorKind> {
    STATUS_TEXT_KINDS.get_or_init(|| {
        HashMap::from([
            ("INCORRECT_REQUEST", ErrorKind::BadRequest),
            ("INTERNAL_SERVER_ERROR", ErrorKind::InternalError),
            ("UNAUTHORIZED", ErrorKind::Unauthorized),
            ("FORBIDDEN", ErrorKind::Forbidden),
            ("OVER_QUOTAS", ErrorKind::OverQuota),
            ("NOT_FOUND", ErrorKind::NotFound),
            ("CONFLICT", ErrorKind::Conflict),
            ("TOO_MANY_REQUESTS", ErrorKind::TooManyRequests),
            ("NOT_ALLOWED", ErrorKind::MethodNotAllowed),
        ])
    })
}

impl ErrorKind {
    /// Classify a backend `status_text` token
    ///
    /// Returns `None` for tokens outside the registry; the transport then
    /// substitutes [`ErrorKind::Unknown`].
    pub fn from_status_text(status_text: &str) -> Option<Self> {
        status_text_kinds().get(status_text).copied()
    }

    /// Stable diagnostic token for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NoAuthOpts => "CLIENT_NO_AUTH_OPTS",
            ErrorKind::NoAuthMethod => "CLIENT_NO_AUTH_METHOD",
            ErrorKind::AuthTokenUnauthorized => "AUTH_TOKEN_UNAUTHORIZED",
            ErrorKind::EmptySecretName => "EMPTY_SECRET_NAME",
            ErrorKind::EmptySecretValue => "EMPTY_SECRET_VALUE",
            ErrorKind::EmptyCertificateId => "EMPTY_CERT_ID",
            ErrorKind::EmptyCertificateName => "EMPTY_CERT_NAME",
            ErrorKind::EmptyPemCertificates => "EMPTY_CERT_PEM_CERT",
            ErrorKind::EmptyPemPrivateKey => "EMPTY_CERT_PEM_PK",
            ErrorKind::CannotMarshalSecret => "CANNOT_MARSHAL_SECRET",
            ErrorKind::CannotMarshalCertificate => "CANNOT_MARSHAL_CERT",
            ErrorKind::InternalAppError => "INTERNAL_APP_ERROR",
            ErrorKind::CannotReadBody => "CANNOT_READ_RESPONSE_BODY",
            ErrorKind::CannotUnmarshalBody => "CANNOT_UNMARSHAL_JSON",
            ErrorKind::BadRequest => "INCORRECT_REQUEST",
            ErrorKind::InternalError => "INTERNAL_SERVER_ERROR",
            ErrorKind::Unauthorized => "UNAUTHORIZED",
            ErrorKind::Forbidden => "FORBIDDEN",
            ErrorKind::OverQuota => "OVER_QUOTAS",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Conflict => "CONFLICT",
            ErrorKind::TooManyRequests => "TOO_MANY_REQUESTS",
            ErrorKind::MethodNotAllowed => "NOT_ALLOWED",
            ErrorKind::Unknown => "UNKNOWN_ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend error envelope
///
/// Decoded only for statuses >= 400 other than 401; 401 bodies are not
/// required to follow this shape and are never parsed.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorResponse {
    pub status_text: String,
    #[serde(default)]
    pub error_text: String,
}
