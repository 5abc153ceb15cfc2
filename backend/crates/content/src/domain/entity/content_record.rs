//! Content Record Entity

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use shared::id::ContentId;

use crate::domain::kind::ResourceKind;
use crate::domain::payload::ValidatedPayload;

/// One persisted content document.
///
/// `data` is the flat document as submitted (minus the `order`/`isActive`
/// controls, which live in dedicated fields so the list query can sort and
/// filter on them).
#[derive(Debug, Clone)]
pub struct ContentRecord {
    pub id: ContentId,
    pub kind: ResourceKind,
    pub data: Map<String, Value>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentRecord {
    /// Create a new record from a validated payload.
    pub fn new(kind: ResourceKind, payload: ValidatedPayload) -> Self {
        let now = Utc::now();
        Self {
            id: ContentId::new(),
            kind,
            data: payload.data,
            sort_order: payload.sort_order,
            is_active: payload.is_active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the document with a new validated payload.
    pub fn apply(&mut self, payload: ValidatedPayload) {
        self.data = payload.data;
        self.sort_order = payload.sort_order;
        self.is_active = payload.is_active;
        self.updated_at = Utc::now();
    }

    /// Image URLs stored in this record, per the kind's URL fields.
    pub fn image_urls(&self) -> Vec<&str> {
        self.kind
            .image_url_fields()
            .iter()
            .filter_map(|field| self.data.get(*field).and_then(Value::as_str))
            .filter(|url| !url.trim().is_empty())
            .collect()
    }
}
