//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::application::StatsOutput;
use crate::domain::entity::ContentRecord;

/// List query: `?active=true` narrows to active records
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub active: Option<bool>,
}

/// One content record as served to clients.
///
/// The flat document is flattened into the object alongside the controls,
/// mirroring the shape clients submit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItemResponse {
    pub id: String,
    pub order: i32,
    pub is_active: bool,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

impl From<&ContentRecord> for ContentItemResponse {
    fn from(record: &ContentRecord) -> Self {
        Self {
            id: record.id.to_string(),
            order: record.sort_order,
            is_active: record.is_active,
            created_at_ms: record.created_at.timestamp_millis(),
            updated_at_ms: record.updated_at.timestamp_millis(),
            data: record.data.clone(),
        }
    }
}

/// Delete confirmation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
    pub deleted: bool,
    pub id: String,
}

/// Dashboard statistics
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub logos: i64,
    pub projects: i64,
    pub testimonials: i64,
    pub services: i64,
    pub gallery: i64,
    pub total: i64,
}

impl From<StatsOutput> for StatsResponse {
    fn from(stats: StatsOutput) -> Self {
        Self {
            logos: stats.logos,
            projects: stats.projects,
            testimonials: stats.testimonials,
            services: stats.services,
            gallery: stats.gallery,
            total: stats.total(),
        }
    }
}
