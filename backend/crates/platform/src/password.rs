//! Password hashing and verification
//!
//! Argon2id (memory-hard, OWASP-recommended) with zeroization of plaintext
//! material. Verification goes through the argon2 crate, whose comparison is
//! constant-time.
//!
//! NIST SP 800-63B: at least 8 characters, permit long passphrases, NFKC
//! normalization so the same passphrase typed on different platforms hashes
//! identically.

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString,
};
use rand::rngs::OsRng;
use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Minimum password length (NIST: SHALL be at least 8)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length (NIST: SHOULD permit at least 64)
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Errors
// ============================================================================

/// Password policy violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Hashing/verification failures
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Raw password (zeroized on drop)
// ============================================================================

/// Plaintext password with automatic memory zeroization.
///
/// Not `Clone`, so plaintext copies cannot leak accidentally; `Debug` output
/// is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct RawPassword(String);

impl RawPassword {
    /// Validate and NFKC-normalize a plaintext password.
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        if password.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        if password.chars().any(char::is_control) {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        let normalized: String = password.nfkc().collect();
        let len = normalized.chars().count();

        if len < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: len,
            });
        }
        if len > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: len,
            });
        }

        Ok(Self(normalized))
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawPassword(***)")
    }
}

// ============================================================================
// Hashed password (PHC string)
// ============================================================================

/// Argon2id password hash in PHC string format.
///
/// This is the only representation of a password that ever leaves this
/// module; it is safe to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Hash a validated plaintext password with a fresh random salt.
    pub fn from_raw(raw: &RawPassword) -> Result<Self, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(raw.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(Self(hash.to_string()))
    }

    /// Rehydrate from a stored PHC string.
    pub fn from_phc(phc: impl Into<String>) -> Self {
        Self(phc.into())
    }

    /// Verify a plaintext password against this hash.
    ///
    /// The argon2 crate compares digests in constant time.
    pub fn verify(&self, raw: &RawPassword) -> Result<bool, PasswordHashError> {
        let parsed =
            PasswordHash::new(&self.0).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        match Argon2::default().verify_password(raw.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordHashError::HashingFailed(e.to_string())),
        }
    }

    /// PHC string for persistence.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
