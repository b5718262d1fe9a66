//! Certificate operations
//!
//! [`CertificatesService`] covers the certificate-manager part of the API:
//! uploading and listing certificates, rotating versions, renaming,
//! attaching consumers, and downloading the CA chain, private key or a
//! PKCS#12 bundle. Every operation validates its input before anything is
//! sent.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;

use crate::endpoints::CertificateEndpoints;
use crate::errors::{Error, ErrorKind, Result};
use crate::models::{Certificate, Consumer, CreateCertificateRequest, Pem};
use crate::transport::Transport;

/// Body wrapper for version uploads, `{"pem": {...}}` on the wire.
#[derive(Serialize)]
struct PemRequest {
    pem: Pem,
}

/// Body wrapper for renames, `{"name": ...}` on the wire.
#[derive(Serialize)]
struct NameRequest {
    name: String,
}

/// Body wrapper for consumer changes, `{"consumers": [...]}` on the wire.
#[derive(Serialize)]
struct ConsumersRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    consumers: Vec<Consumer>,
}

/// Certificates part of the API
///
/// Obtained from [`Client::certificates`](crate::Client::certificates); all
/// methods go through the client's shared transport.
#[derive(Debug, Clone)]
pub struct CertificatesService {
    endpoints: CertificateEndpoints,
    transport: Arc<Transport>,
}

impl CertificatesService {
    pub(crate) fn new(base_url: &str, transport: Arc<Transport>) -> Self {
        Self {
            endpoints: CertificateEndpoints::new(base_url),
            transport,
        }
    }

    /// List all managed certificates
    pub async fn list(&self) -> Result<Vec<Certificate>> {
        let body = self
            .transport
            .execute(Method::GET, &self.endpoints.certificates(), None)
            .await?;
        serde_json::from_slice(&body)
            .map_err(|e| Error::new(ErrorKind::CannotUnmarshalBody, e.to_string()))
    }

    /// Upload a new certificate
    ///
    /// Returns the stored certificate with its assigned id. The name and
    /// both PEM parts are required; missing fields fail with
    /// [`ErrorKind::EmptyCertificateName`],
    /// [`ErrorKind::EmptyPemCertificates`] or
    /// [`ErrorKind::EmptyPemPrivateKey`] before any network call.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use secretsmanager_sdk::{Client, CreateCertificateRequest, Pem};
    /// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let cert = client
    ///     .certificates()
    ///     .create(CreateCertificateRequest {
    ///         name: "ingress-tls".to_string(),
    ///         pem: Pem {
    ///             certificates: vec![std::fs::read_to_string("cert.pem")?],
    ///             private_key: std::fs::read_to_string("key.pem")?,
    ///         },
    ///     })
    ///     .await?;
    /// println!("uploaded as {}", cert.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, request: CreateCertificateRequest) -> Result<Certificate> {
        if request.name.is_empty() {
            return Err(Error::new(
                ErrorKind::EmptyCertificateName,
                "certificate name is empty",
            ));
        }
        validate_pem(&request.pem)?;

        let body = serde_json::to_vec(&request)
            .map_err(|e| Error::new(ErrorKind::CannotMarshalCertificate, e.to_string()))?;
        let body = self
            .transport
            .execute(Method::POST, &self.endpoints.certificates(), Some(body))
            .await?;
        serde_json::from_slice(&body)
            .map_err(|e| Error::new(ErrorKind::CannotUnmarshalBody, e.to_string()))
    }

    /// Fetch one certificate with its metadata
    ///
    /// Fails with [`ErrorKind::EmptyCertificateId`] before any network call
    /// if `id` is empty, as do all other per-certificate operations.
    pub async fn get(&self, id: &str) -> Result<Certificate> {
        check_id(id)?;

        let body = self
            .transport
            .execute(Method::GET, &self.endpoints.certificate(id), None)
            .await?;
        serde_json::from_slice(&body)
            .map_err(|e| Error::new(ErrorKind::CannotUnmarshalBody, e.to_string()))
    }

    /// Delete a certificate
    pub async fn delete(&self, id: &str) -> Result<()> {
        check_id(id)?;

        let _ = self
            .transport
            .execute(Method::DELETE, &self.endpoints.certificate(id), None)
            .await?;
        Ok(())
    }

    /// Upload new PEM material for an existing certificate
    ///
    /// Bumps the certificate version. The PEM parts are validated like in
    /// [`create`](Self::create).
    pub async fn update_version(&self, id: &str, pem: Pem) -> Result<()> {
        check_id(id)?;
        validate_pem(&pem)?;

        let body = serde_json::to_vec(&PemRequest { pem })
            .map_err(|e| Error::new(ErrorKind::CannotMarshalCertificate, e.to_string()))?;
        let _ = self
            .transport
            .execute(Method::POST, &self.endpoints.certificate(id), Some(body))
            .await?;
        Ok(())
    }

    /// Rename a certificate
    ///
    /// Fails with [`ErrorKind::EmptyCertificateName`] if the new name is
    /// empty.
    pub async fn update_name(&self, id: &str, name: &str) -> Result<()> {
        check_id(id)?;
        if name.is_empty() {
            return Err(Error::new(
                ErrorKind::EmptyCertificateName,
                "certificate name is empty",
            ));
        }

        let request = NameRequest {
            name: name.to_string(),
        };
        let body = serde_json::to_vec(&request)
            .map_err(|e| Error::new(ErrorKind::CannotMarshalCertificate, e.to_string()))?;
        let _ = self
            .transport
            .execute(Method::PUT, &self.endpoints.certificate(id), Some(body))
            .await?;
        Ok(())
    }

    /// Attach consumers to a certificate
    pub async fn add_consumers(&self, id: &str, consumers: Vec<Consumer>) -> Result<()> {
        check_id(id)?;

        let body = serde_json::to_vec(&ConsumersRequest { consumers })
            .map_err(|e| Error::new(ErrorKind::CannotMarshalCertificate, e.to_string()))?;
        let _ = self
            .transport
            .execute(Method::PUT, &self.endpoints.consumers(id), Some(body))
            .await?;
        Ok(())
    }

    /// Detach consumers from a certificate
    pub async fn remove_consumers(&self, id: &str, consumers: Vec<Consumer>) -> Result<()> {
        check_id(id)?;

        let body = serde_json::to_vec(&ConsumersRequest { consumers })
            .map_err(|e| Error::new(ErrorKind::CannotMarshalCertificate, e.to_string()))?;
        let _ = self
            .transport
            .execute(Method::DELETE, &self.endpoints.consumers(id), Some(body))
            .await?;
        Ok(())
    }

    /// Download the CA chain as PEM text
    pub async fn ca_chain(&self, id: &str) -> Result<String> {
        check_id(id)?;

        let body = self
            .transport
            .execute(Method::GET, &self.endpoints.ca_chain(id), None)
            .await?;
        text_body(body)
    }

    /// Download the private key as PEM text
    pub async fn private_key(&self, id: &str) -> Result<String> {
        check_id(id)?;

        let body = self
            .transport
            .execute(Method::GET, &self.endpoints.private_key(id), None)
            .await?;
        text_body(body)
    }

    /// Download the certificate and key as a binary PKCS#12 bundle
    pub async fn pkcs12_bundle(&self, id: &str) -> Result<Vec<u8>> {
        check_id(id)?;

        let body = self
            .transport
            .execute(Method::GET, &self.endpoints.pkcs12(id), None)
            .await?;
        Ok(body.to_vec())
    }
}

fn check_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::new(
            ErrorKind::EmptyCertificateId,
            "certificate id is empty",
        ));
    }
    Ok(())
}

fn validate_pem(pem: &Pem) -> Result<()> {
    if pem.certificates.is_empty() {
        return Err(Error::new(
            ErrorKind::EmptyPemCertificates,
            "PEM bundle has no certificates",
        ));
    }
    if pem.private_key.is_empty() {
        return Err(Error::new(
            ErrorKind::EmptyPemPrivateKey,
            "PEM bundle has no private key",
        ));
    }
    Ok(())
}

fn text_body(body: bytes::Bytes) -> Result<String> {
    String::from_utf8(body.to_vec())
        .map_err(|e| Error::new(ErrorKind::CannotUnmarshalBody, e.to_string()))
}
