//! Content Routers

use axum::{
    Router,
    routing::{get, put},
};

use storage::ObjectStore;

use crate::domain::repository::ContentRepository;
use crate::presentation::handlers::{self, ContentAppState};

/// CRUD routes, nested under `/api/content`.
pub fn content_router<R, S>(state: ContentAppState<R, S>) -> Router
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ObjectStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/{kind}", get(handlers::list::<R, S>).post(handlers::create::<R, S>))
        .route(
            "/{kind}/{id}",
            put(handlers::update::<R, S>).delete(handlers::remove::<R, S>),
        )
        .with_state(state)
}

/// Dashboard routes, nested under `/api/dashboard`.
pub fn dashboard_router<R, S>(state: ContentAppState<R, S>) -> Router
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ObjectStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/stats", get(handlers::stats::<R, S>))
        .with_state(state)
}
