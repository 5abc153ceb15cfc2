//! Object storage (Cloudflare R2 / S3-compatible)
//!
//! The backend never proxies image bytes; it only needs to delete orphaned
//! objects when a content record is removed. This crate provides:
//! - SigV4 request signing ([`sigv4`])
//! - a thin `DeleteObject` client ([`client`])
//! - derivation of object keys from stored public URLs ([`keys`])
//!
//! All deletions are best-effort: callers log failures and move on.

pub mod client;
pub mod keys;
pub mod sigv4;

pub use client::{ObjectStore, R2Client, StorageError};
pub use keys::derive_object_key;
