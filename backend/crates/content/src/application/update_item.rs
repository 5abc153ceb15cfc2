//! Update Item Use Case

use serde_json::Value;
use std::sync::Arc;

use shared::id::ContentId;

use crate::domain::entity::ContentRecord;
use crate::domain::kind::ResourceKind;
use crate::domain::payload;
use crate::domain::repository::ContentRepository;
use crate::error::{ContentError, ContentResult};

/// Replace an existing record's document with a validated payload.
pub struct UpdateItemUseCase<R>
where
    R: ContentRepository + Send + Sync + 'static,
{
    repo: Arc<R>,
}

impl<R> UpdateItemUseCase<R>
where
    R: ContentRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        kind: ResourceKind,
        id: ContentId,
        body: Value,
    ) -> ContentResult<ContentRecord> {
        let payload = payload::validate(kind, body)?;

        let mut record = self
            .repo
            .find(kind, &id)
            .await?
            .ok_or(ContentError::NotFound)?;

        record.apply(payload);

        if !self.repo.update(&record).await? {
            // Deleted between find and update
            return Err(ContentError::NotFound);
        }

        tracing::info!(kind = kind.slug(), id = %record.id, "Content record updated");

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryContentRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_updates_document_and_controls() {
        let repo = Arc::new(InMemoryContentRepository::default());
        let record = ContentRecord::new(
            ResourceKind::Services,
            payload::validate(
                ResourceKind::Services,
                json!({"title": "Advisory", "description": "We advise."}),
            )
            .unwrap(),
        );
        let id = record.id;
        repo.seed(record);

        let use_case = UpdateItemUseCase::new(repo.clone());
        let updated = use_case
            .execute(
                ResourceKind::Services,
                id,
                json!({"title": "Strategy", "description": "We strategize.",
                       "order": 7, "isActive": false}),
            )
            .await
            .unwrap();

        assert_eq!(updated.data["title"], "Strategy");
        assert_eq!(updated.sort_order, 7);
        assert!(!updated.is_active);

        let stored = repo.find(ResourceKind::Services, &id).await.unwrap().unwrap();
        assert_eq!(stored.data["title"], "Strategy");
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let repo = Arc::new(InMemoryContentRepository::default());
        let use_case = UpdateItemUseCase::new(repo);

        let err = use_case
            .execute(
                ResourceKind::Services,
                ContentId::new(),
                json!({"title": "Strategy", "description": "We strategize."}),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ContentError::NotFound));
    }
}
