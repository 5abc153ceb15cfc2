//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, the authorization gate, and the session
//! extractor other crates use to guard their mutation endpoints.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use extract::CurrentAdmin;
pub use handlers::AuthAppState;
pub use middleware::{RouteClass, admin_gate, classify};
pub use router::{auth_router, auth_router_generic};
