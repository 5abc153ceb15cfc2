//! Create Item Use Case

use serde_json::Value;
use std::sync::Arc;

use crate::domain::entity::ContentRecord;
use crate::domain::kind::ResourceKind;
use crate::domain::payload;
use crate::domain::repository::ContentRepository;
use crate::error::ContentResult;

/// Validate a payload and persist a new record.
pub struct CreateItemUseCase<R>
where
    R: ContentRepository + Send + Sync + 'static,
{
    repo: Arc<R>,
}

impl<R> CreateItemUseCase<R>
where
    R: ContentRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, kind: ResourceKind, body: Value) -> ContentResult<ContentRecord> {
        let payload = payload::validate(kind, body)?;
        let record = ContentRecord::new(kind, payload);

        self.repo.insert(&record).await?;

        tracing::info!(
            kind = kind.slug(),
            id = %record.id,
            "Content record created"
        );

        Ok(record)
    }
}
