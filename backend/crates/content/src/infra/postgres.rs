//! PostgreSQL Repository Implementation
//!
//! All kinds share one `content_items` table; the flat document lives in a
//! JSONB column while display order and the active flag are real columns the
//! list query sorts and filters on. The `created_at` tie-break in the ORDER
//! BY resolves display-order collisions by insertion time.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::PgPool;
use uuid::Uuid;

use shared::id::ContentId;

use crate::domain::entity::ContentRecord;
use crate::domain::kind::ResourceKind;
use crate::domain::repository::ContentRepository;
use crate::error::ContentResult;

/// PostgreSQL-backed content repository
#[derive(Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const ITEM_COLUMNS: &str = r#"
    item_id,
    data,
    sort_order,
    is_active,
    created_at,
    updated_at
"#;

impl ContentRepository for PgContentRepository {
    async fn list(
        &self,
        kind: ResourceKind,
        active_only: bool,
    ) -> ContentResult<Vec<ContentRecord>> {
        let rows = sqlx::query_as::<_, ItemRow>(&format!(
            r#"
            SELECT {ITEM_COLUMNS} FROM content_items
            WHERE kind = $1 AND ($2 = false OR is_active)
            ORDER BY sort_order ASC, created_at ASC
            "#
        ))
        .bind(kind.slug())
        .bind(active_only)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_record(kind)).collect())
    }

    async fn find(
        &self,
        kind: ResourceKind,
        id: &ContentId,
    ) -> ContentResult<Option<ContentRecord>> {
        let row = sqlx::query_as::<_, ItemRow>(&format!(
            "SELECT {ITEM_COLUMNS} FROM content_items WHERE kind = $1 AND item_id = $2"
        ))
        .bind(kind.slug())
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_record(kind)))
    }

    async fn insert(&self, record: &ContentRecord) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO content_items (
                item_id, kind, data, sort_order, is_active, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.kind.slug())
        .bind(Value::Object(record.data.clone()))
        .bind(record.sort_order)
        .bind(record.is_active)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, record: &ContentRecord) -> ContentResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE content_items
            SET data = $3, sort_order = $4, is_active = $5, updated_at = $6
            WHERE kind = $1 AND item_id = $2
            "#,
        )
        .bind(record.kind.slug())
        .bind(record.id.as_uuid())
        .bind(Value::Object(record.data.clone()))
        .bind(record.sort_order)
        .bind(record.is_active)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(
        &self,
        kind: ResourceKind,
        id: &ContentId,
    ) -> ContentResult<Option<ContentRecord>> {
        let row = sqlx::query_as::<_, ItemRow>(&format!(
            "DELETE FROM content_items WHERE kind = $1 AND item_id = $2 RETURNING {ITEM_COLUMNS}"
        ))
        .bind(kind.slug())
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_record(kind)))
    }

    async fn count(&self, kind: ResourceKind) -> ContentResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM content_items WHERE kind = $1")
                .bind(kind.slug())
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}

// ============================================================================
// Row mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ItemRow {
    item_id: Uuid,
    data: Value,
    sort_order: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ItemRow {
    fn into_record(self, kind: ResourceKind) -> ContentRecord {
        let data = match self.data {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        ContentRecord {
            id: ContentId::from_uuid(self.item_id),
            kind,
            data,
            sort_order: self.sort_order,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
