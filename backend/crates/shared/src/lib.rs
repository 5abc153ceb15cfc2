//! Shared kernel for the site backend
//!
//! The smallest common vocabulary used by every other crate:
//! - Unified error type ([`error::app_error::AppError`]) and its HTTP mapping
//! - Typed ID wrappers for domain entities
//!
//! Only things that are hard to change and mean the same thing in every
//! domain belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;

    pub use app_error::{AppError, AppResult};
    pub use kind::ErrorKind;
}
pub mod id;
