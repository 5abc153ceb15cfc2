//! Object-store client
//!
//! `DeleteObject` against an S3-compatible endpoint (Cloudflare R2). The
//! trait seam exists so content handlers can be tested without a network.

use chrono::Utc;
use thiserror::Error;

use crate::sigv4::{SigningContext, uri_encode_path};

/// Object-store failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Object store request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Object store returned status {0}")]
    UnexpectedStatus(u16),

    #[error("Invalid object store configuration: {0}")]
    Config(String),
}

/// Minimal object-store interface used by the content handlers.
#[trait_variant::make(ObjectStore: Send)]
pub trait LocalObjectStore {
    /// Delete one object by key. Deleting a missing object is not an error.
    async fn delete_object(&self, key: &str) -> Result<(), StorageError>;
}

/// Cloudflare R2 client (S3-compatible, SigV4 header auth).
#[derive(Clone)]
pub struct R2Client {
    http: reqwest::Client,
    /// e.g. `https://<account>.r2.cloudflarestorage.com`
    endpoint: String,
    host: String,
    bucket: String,
    signing: SigningContext,
}

impl R2Client {
    /// Create a client for one bucket.
    ///
    /// R2 uses the pseudo-region `auto`.
    pub fn new(
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Result<Self, StorageError> {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();

        let host = endpoint
            .strip_prefix("https://")
            .or_else(|| endpoint.strip_prefix("http://"))
            .ok_or_else(|| {
                StorageError::Config(format!("endpoint must be an http(s) URL: {endpoint}"))
            })?
            .to_string();

        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
            host,
            bucket: bucket.into(),
            signing: SigningContext {
                access_key_id: access_key_id.into(),
                secret_access_key: secret_access_key.into(),
                region: "auto".to_string(),
                service: "s3".to_string(),
            },
        })
    }
}

impl ObjectStore for R2Client {
    async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        let key = key.trim_start_matches('/');
        let path = uri_encode_path(&format!("/{}/{}", self.bucket, key));

        let signed = self.signing.sign("DELETE", &self.host, &path, Utc::now());

        let response = self
            .http
            .delete(format!("{}{}", self.endpoint, path))
            .header("authorization", signed.authorization)
            .header("x-amz-date", signed.amz_date)
            .header("x-amz-content-sha256", signed.amz_content_sha256)
            .send()
            .await?;

        // 404 counts as deleted: the object was already gone.
        match response.status().as_u16() {
            204 | 200 | 404 => Ok(()),
            status => Err(StorageError::UnexpectedStatus(status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_endpoint() {
        let result = R2Client::new("acct.r2.cloudflarestorage.com", "assets", "ak", "sk");
        assert!(matches!(result, Err(StorageError::Config(_))));
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let client = R2Client::new(
            "https://acct.r2.cloudflarestorage.com/",
            "assets",
            "ak",
            "sk",
        )
        .unwrap();
        assert_eq!(client.endpoint, "https://acct.r2.cloudflarestorage.com");
        assert_eq!(client.host, "acct.r2.cloudflarestorage.com");
    }
}
