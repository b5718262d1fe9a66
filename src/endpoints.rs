//! API endpoint URL construction

use percent_encoding::{AsciiSet, CONTROLS};

/// Characters percent-encoded when a value is interpolated into a path
/// segment. Covers everything that would terminate or split the segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// URL encode a path segment
fn encode_path(s: &str) -> String {
    percent_encoding::utf8_percent_encode(s, SEGMENT).to_string()
}

/// Endpoint builder for the secrets API
#[derive(Debug, Clone)]
pub struct SecretsEndpoints {
    base_url: String,
}

impl SecretsEndpoints {
    /// Create a new endpoints builder from the service base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Listing URL; `list` is a bare query flag, not a path segment
    pub fn list(&self) -> String {
        format!("{}/v1?list", self.base_url)
    }

    /// URL of a single secret, shared by get/create/update/delete
    pub fn secret(&self, key: &str) -> String {
        format!("{}/v1/{}", self.base_url, encode_path(key))
    }
}

/// Endpoint builder for the certificates API
#[derive(Debug, Clone)]
pub struct CertificateEndpoints {
    base_url: String,
}

impl CertificateEndpoints {
    /// Create a new endpoints builder from the service base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Collection URL, shared by list and create
    pub fn certificates(&self) -> String {
        format!("{}/certs", self.base_url)
    }

    /// URL of a single certificate, shared by get/delete/update
    pub fn certificate(&self, id: &str) -> String {
        format!("{}/cert/{}", self.base_url, encode_path(id))
    }

    /// Consumer attachment URL, shared by add and remove
    pub fn consumers(&self, id: &str) -> String {
        format!("{}/consumers", self.certificate(id))
    }

    /// CA chain download URL
    pub fn ca_chain(&self, id: &str) -> String {
        format!("{}/ca_chain", self.certificate(id))
    }

    /// Private key download URL
    pub fn private_key(&self, id: &str) -> String {
        format!("{}/private_key", self.certificate(id))
    }

    /// PKCS#12 bundle download URL
    pub fn pkcs12(&self, id: &str) -> String {
        format!("{}/p12", self.certificate(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_secrets_endpoints() {
        let endpoints = SecretsEndpoints::new("https://api.example.com");

        assert_eq!(endpoints.list(), "https://api.example.com/v1?list");
        assert_eq!(
            endpoints.secret("db-pass"),
            "https://api.example.com/v1/db-pass"
        );
        assert_eq!(
            endpoints.secret("my key"),
            "https://api.example.com/v1/my%20key"
        );
        assert_eq!(
            endpoints.secret("a/b"),
            "https://api.example.com/v1/a%2Fb"
        );
    }

    #[test]
    fn test_certificate_endpoints() {
        let endpoints = CertificateEndpoints::new("https://api.example.com");

        assert_eq!(endpoints.certificates(), "https://api.example.com/certs");
        assert_eq!(
            endpoints.certificate("9ddc1899"),
            "https://api.example.com/cert/9ddc1899"
        );
        assert_eq!(
            endpoints.consumers("9ddc1899"),
            "https://api.example.com/cert/9ddc1899/consumers"
        );
        assert_eq!(
            endpoints.ca_chain("9ddc1899"),
            "https://api.example.com/cert/9ddc1899/ca_chain"
        );
        assert_eq!(
            endpoints.private_key("9ddc1899"),
            "https://api.example.com/cert/9ddc1899/private_key"
        );
        assert_eq!(
            endpoints.pkcs12("9ddc1899"),
            "https://api.example.com/cert/9ddc1899/p12"
        );
    }

    #[test]
    fn test_trailing_slash() {
        let endpoints = SecretsEndpoints::new("https://api.example.com/secrets-manager/v1/");
        assert_eq!(
            endpoints.list(),
            "https://api.example.com/secrets-manager/v1/v1?list"
        );

        let endpoints = CertificateEndpoints::new("https://api.example.com/certificate-manager/v1/");
        assert_eq!(
            endpoints.certificates(),
            "https://api.example.com/certificate-manager/v1/certs"
        );
    }

    #[test]
    fn test_encode_path() {
        assert_eq!(encode_path("hello world"), "hello%20world");
        assert_eq!(encode_path("test/path"), "test%2Fpath");
        assert_eq!(encode_path("50%"), "50%25");
        assert_eq!(encode_path("my-key"), "my-key");
        assert_eq!(encode_path("my_key"), "my_key");
        assert_eq!(encode_path("my.key"), "my.key");
    }

    proptest! {
        // whatever the caller passes, one parameter stays one path segment
        #[test]
        fn test_encoded_segment_never_splits_url(s in ".*") {
            let encoded = encode_path(&s);
            prop_assert!(!encoded.contains('/'));
            prop_assert!(!encoded.contains('?'));
            prop_assert!(!encoded.contains('#'));
            prop_assert!(!encoded.contains(' '));
        }
    }
}
