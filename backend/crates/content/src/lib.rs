//! Content Backend Module
//!
//! CRUD resources for the marketing site: logos, projects, testimonials,
//! services, and gallery images. Records are flat documents with an explicit
//! display order and an active flag; the site reads them through open list
//! endpoints while all mutations require an admin session.
//!
//! Clean Architecture structure:
//! - `domain/` - Resource kinds, records, payload validation, repository trait
//! - `application/` - CRUD use cases and dashboard statistics
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers, DTOs, routers

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use domain::kind::ResourceKind;
pub use error::{ContentError, ContentResult};
pub use infra::postgres::PgContentRepository;
pub use presentation::router::{content_router, dashboard_router};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}
