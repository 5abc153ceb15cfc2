//! Platform crate - technical infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Password hashing (Argon2id) with zeroized plaintext handling
//! - Session cookie building and parsing

pub mod cookie;
pub mod password;
