//! Infrastructure Layer
//!
//! PostgreSQL repository implementation.

pub mod postgres;

#[cfg(test)]
pub mod memory;
