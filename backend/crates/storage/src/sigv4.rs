//! AWS Signature Version 4 request signing
//!
//! Just enough of SigV4 for header-authenticated requests with an empty
//! body, which is all `DeleteObject` needs: canonical request, string to
//! sign, and the four-step signing-key derivation.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// SHA-256 of the empty string; the payload hash for bodyless requests.
pub const EMPTY_PAYLOAD_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

const SIGNED_HEADERS: &str = "host;x-amz-content-sha256;x-amz-date";

/// Credential scope and timestamps for one request.
#[derive(Debug, Clone)]
pub struct SigningContext {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    pub service: String,
}

/// Headers a signed request must carry.
#[derive(Debug, Clone)]
pub struct SignedHeaders {
    pub authorization: String,
    pub amz_date: String,
    pub amz_content_sha256: &'static str,
}

impl SigningContext {
    /// Sign a bodyless request.
    ///
    /// `path` must already be URI-encoded (see [`uri_encode_path`]).
    pub fn sign(
        &self,
        method: &str,
        host: &str,
        path: &str,
        now: DateTime<Utc>,
    ) -> SignedHeaders {
        let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
        let datestamp = now.format("%Y%m%d").to_string();

        let canonical_headers = format!(
            "host:{host}\nx-amz-content-sha256:{EMPTY_PAYLOAD_SHA256}\nx-amz-date:{amz_date}\n"
        );

        // Canonical query string is empty: DeleteObject takes no parameters.
        let canonical_request = format!(
            "{method}\n{path}\n\n{canonical_headers}\n{SIGNED_HEADERS}\n{EMPTY_PAYLOAD_SHA256}"
        );

        let scope = format!(
            "{datestamp}/{}/{}/aws4_request",
            self.region, self.service
        );
        let string_to_sign = format!(
            "AWS4-HMAC-SHA256\n{amz_date}\n{scope}\n{}",
            hex::encode(sha256(canonical_request.as_bytes()))
        );

        let signing_key = derive_signing_key(
            &self.secret_access_key,
            &datestamp,
            &self.region,
            &self.service,
        );
        let signature = hex::encode(hmac(&signing_key, string_to_sign.as_bytes()));

        let authorization = format!(
            "AWS4-HMAC-SHA256 Credential={}/{scope}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}",
            self.access_key_id
        );

        SignedHeaders {
            authorization,
            amz_date,
            amz_content_sha256: EMPTY_PAYLOAD_SHA256,
        }
    }
}

/// Four-step SigV4 signing-key derivation.
///
/// kSigning = HMAC(HMAC(HMAC(HMAC("AWS4" + secret, date), region), service), "aws4_request")
pub fn derive_signing_key(secret: &str, datestamp: &str, region: &str, service: &str) -> Vec<u8> {
    let k_date = hmac(format!("AWS4{secret}").as_bytes(), datestamp.as_bytes());
    let k_region = hmac(&k_date, region.as_bytes());
    let k_service = hmac(&k_region, service.as_bytes());
    hmac(&k_service, b"aws4_request")
}

/// Percent-encode a path for the canonical URI.
///
/// Every character except unreserved ones and the segment separator `/` is
/// encoded, per the SigV4 canonical-request rules.
pub fn uri_encode_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for byte in path.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

fn hmac(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}
