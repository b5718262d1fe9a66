//! Authentication support for the Secrets Manager SDK
//!
//! The backend authenticates every request through an `X-Auth-Token` header
//! carrying a pre-obtained session token. [`Auth`] wraps that token as an
//! immutable credential: construct it once, hand it to the
//! [`ClientBuilder`](crate::ClientBuilder), and every request issued through
//! the client reuses it.
//!
//! # Example
//!
//! ```
//! use secretsmanager_sdk::Auth;
//!
//! let auth = Auth::token("gAAAAAB-example-session-token")?;
//! # Ok::<(), secretsmanager_sdk::Error>(())
//! ```

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{Error, ErrorKind, Result};

/// Credential used to authenticate requests
///
/// Exactly one method exists today: a static pre-obtained session token.
/// Further methods (e.g. username/password exchange) would be added as new
/// variants behind the same accessor, which is why the enum is
/// `#[non_exhaustive]`.
///
/// # Security
///
/// The token is stored as a [`SecretString`] so it never shows up in `Debug`
/// output and is zeroized on drop.
#[derive(Clone)]
#[non_exhaustive]
pub enum Auth {
    /// Static pre-obtained session token, sent as `X-Auth-Token: <token>`
    Token(SecretString),
}

impl Auth {
    /// Create a credential from a pre-obtained session token
    ///
    /// Fails with [`ErrorKind::NoAuthMethod`] if the token is empty; a
    /// credential can never exist without usable material behind it.
    pub fn token(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(Error::new(ErrorKind::NoAuthMethod, "provided token is empty"));
        }
        Ok(Auth::Token(SecretString::new(token)))
    }

    /// Get the token value for the `X-Auth-Token` header
    ///
    /// Total once the credential exists; construction already rejected empty
    /// input.
    pub(crate) fn token_value(&self) -> &str {
        match self {
            Auth::Token(token) => token.expose_secret(),
        }
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Auth::Token(_) => write!(f, "Auth::Token(****)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_auth() {
        let auth = Auth::token("token123").unwrap();
        assert_eq!(auth.token_value(), "token123");
    }

    #[test]
    fn test_empty_token_rejected() {
        let err = Auth::token("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoAuthMethod);
        assert_eq!(err.description(), "provided token is empty");
    }

    #[test]
    fn test_auth_debug_redacts_token() {
        let auth = Auth::token("super-secret").unwrap();
        let debug_str = format!("{:?}", auth);
        assert_eq!(debug_str, "Auth::Token(****)");
        assert!(!debug_str.contains("super-secret"));
    }

    #[test]
    fn test_auth_clone_shares_token() {
        let auth = Auth::token("token123").unwrap();
        let cloned = auth.clone();
        assert_eq!(auth.token_value(), cloned.token_value());
    }
}
