//! HTTP Handlers
//!
//! List endpoints are open (the site renders from them); every mutation and
//! the dashboard statistics require a session via the `CurrentAdmin`
//! extractor, which rejects with a JSON 401.

use axum::Json;
use axum::extract::{FromRef, Path, Query, State};
use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use auth::{AuthConfig, CurrentAdmin};
use shared::id::ContentId;
use storage::ObjectStore;

use crate::application::{
    CreateItemUseCase, DashboardStatsUseCase, DeleteItemUseCase, ListItemsUseCase,
    UpdateItemUseCase,
};
use crate::domain::kind::ResourceKind;
use crate::domain::repository::ContentRepository;
use crate::error::{ContentError, ContentResult};
use crate::presentation::dto::{ContentItemResponse, DeletedResponse, ListQuery, StatsResponse};

/// Shared state for content handlers
#[derive(Clone)]
pub struct ContentAppState<R, S>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ObjectStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    /// Object store for image cleanup; absent when not configured
    pub store: Option<Arc<S>>,
    /// Public origin image URLs are served from
    pub assets_base: Option<String>,
    pub auth: Arc<AuthConfig>,
}

impl<R, S> FromRef<ContentAppState<R, S>> for Arc<AuthConfig>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ObjectStore + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &ContentAppState<R, S>) -> Self {
        state.auth.clone()
    }
}

fn parse_kind(slug: &str) -> ContentResult<ResourceKind> {
    ResourceKind::from_slug(slug).ok_or_else(|| ContentError::UnknownKind(slug.to_string()))
}

fn parse_id(raw: &str) -> ContentResult<ContentId> {
    Uuid::parse_str(raw)
        .map(ContentId::from_uuid)
        .map_err(|_| ContentError::Validation(format!("Invalid record id: {raw}")))
}

// ============================================================================
// List (open)
// ============================================================================

/// GET /api/content/{kind}
pub async fn list<R, S>(
    State(state): State<ContentAppState<R, S>>,
    Path(kind): Path<String>,
    Query(query): Query<ListQuery>,
) -> ContentResult<Json<Vec<ContentItemResponse>>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ObjectStore + Clone + Send + Sync + 'static,
{
    let kind = parse_kind(&kind)?;
    let active_only = query.active.unwrap_or(false);

    let records = ListItemsUseCase::new(state.repo.clone())
        .execute(kind, active_only)
        .await?;

    Ok(Json(records.iter().map(ContentItemResponse::from).collect()))
}

// ============================================================================
// Mutations (session required)
// ============================================================================

/// POST /api/content/{kind}
pub async fn create<R, S>(
    _admin: CurrentAdmin,
    State(state): State<ContentAppState<R, S>>,
    Path(kind): Path<String>,
    Json(body): Json<Value>,
) -> ContentResult<(StatusCode, Json<ContentItemResponse>)>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ObjectStore + Clone + Send + Sync + 'static,
{
    let kind = parse_kind(&kind)?;

    let record = CreateItemUseCase::new(state.repo.clone())
        .execute(kind, body)
        .await?;

    Ok((StatusCode::CREATED, Json(ContentItemResponse::from(&record))))
}

/// PUT /api/content/{kind}/{id}
pub async fn update<R, S>(
    _admin: CurrentAdmin,
    State(state): State<ContentAppState<R, S>>,
    Path((kind, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> ContentResult<Json<ContentItemResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ObjectStore + Clone + Send + Sync + 'static,
{
    let kind = parse_kind(&kind)?;
    let id = parse_id(&id)?;

    let record = UpdateItemUseCase::new(state.repo.clone())
        .execute(kind, id, body)
        .await?;

    Ok(Json(ContentItemResponse::from(&record)))
}

/// DELETE /api/content/{kind}/{id}
pub async fn remove<R, S>(
    _admin: CurrentAdmin,
    State(state): State<ContentAppState<R, S>>,
    Path((kind, id)): Path<(String, String)>,
) -> ContentResult<Json<DeletedResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ObjectStore + Clone + Send + Sync + 'static,
{
    let kind = parse_kind(&kind)?;
    let id = parse_id(&id)?;

    let record = DeleteItemUseCase::new(
        state.repo.clone(),
        state.store.clone(),
        state.assets_base.clone(),
    )
    .execute(kind, id)
    .await?;

    Ok(Json(DeletedResponse {
        deleted: true,
        id: record.id.to_string(),
    }))
}

// ============================================================================
// Dashboard statistics (session required)
// ============================================================================

/// GET /api/dashboard/stats
pub async fn stats<R, S>(
    _admin: CurrentAdmin,
    State(state): State<ContentAppState<R, S>>,
) -> ContentResult<Json<StatsResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
    S: ObjectStore + Clone + Send + Sync + 'static,
{
    let stats = DashboardStatsUseCase::new(state.repo.clone())
        .execute()
        .await?;

    Ok(Json(StatsResponse::from(stats)))
}
