//! Delete Item Use Case
//!
//! Record deletion is authoritative; object-store cleanup is best-effort.
//! A failed object deletion is logged and the request still succeeds — the
//! worst case is an orphaned object, never a dangling record.

use std::sync::Arc;

use shared::id::ContentId;
use storage::{ObjectStore, derive_object_key};

use crate::domain::entity::ContentRecord;
use crate::domain::kind::ResourceKind;
use crate::domain::repository::ContentRepository;
use crate::error::{ContentError, ContentResult};

/// Delete a record and clean up its image objects.
pub struct DeleteItemUseCase<R, S>
where
    R: ContentRepository + Send + Sync + 'static,
    S: ObjectStore + Send + Sync + 'static,
{
    repo: Arc<R>,
    store: Option<Arc<S>>,
    /// Public origin the bucket is served from; keys are derivable only for
    /// URLs under it.
    assets_base: Option<String>,
}

impl<R, S> DeleteItemUseCase<R, S>
where
    R: ContentRepository + Send + Sync + 'static,
    S: ObjectStore + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, store: Option<Arc<S>>, assets_base: Option<String>) -> Self {
        Self {
            repo,
            store,
            assets_base,
        }
    }

    pub async fn execute(&self, kind: ResourceKind, id: ContentId) -> ContentResult<ContentRecord> {
        let record = self
            .repo
            .delete(kind, &id)
            .await?
            .ok_or(ContentError::NotFound)?;

        tracing::info!(kind = kind.slug(), id = %record.id, "Content record deleted");

        if let (Some(store), Some(base)) = (&self.store, &self.assets_base) {
            for url in record.image_urls() {
                let Some(key) = derive_object_key(base, url) else {
                    continue;
                };
                if let Err(e) = store.delete_object(&key).await {
                    tracing::warn!(
                        key = %key,
                        error = %e,
                        "Object cleanup failed after record delete"
                    );
                }
            }
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payload::validate;
    use crate::infra::memory::InMemoryContentRepository;
    use serde_json::json;
    use std::sync::Mutex;
    use storage::StorageError;

    /// Records delete calls; optionally fails them all.
    #[derive(Default)]
    struct RecordingStore {
        deleted: Mutex<Vec<String>>,
        fail: bool,
    }

    impl ObjectStore for RecordingStore {
        async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
            self.deleted.lock().unwrap().push(key.to_string());
            if self.fail {
                Err(StorageError::UnexpectedStatus(500))
            } else {
                Ok(())
            }
        }
    }

    const BASE: &str = "https://assets.example.com";

    fn seeded_gallery(repo: &InMemoryContentRepository) -> ContentId {
        let record = ContentRecord::new(
            ResourceKind::Gallery,
            validate(
                ResourceKind::Gallery,
                json!({"imageUrl": "https://assets.example.com/gallery/site.jpg"}),
            )
            .unwrap(),
        );
        let id = record.id;
        repo.seed(record);
        id
    }

    #[tokio::test]
    async fn test_deletes_record_and_derived_object() {
        let repo = Arc::new(InMemoryContentRepository::default());
        let id = seeded_gallery(&repo);
        let store = Arc::new(RecordingStore::default());

        let use_case = DeleteItemUseCase::new(
            repo.clone(),
            Some(store.clone()),
            Some(BASE.to_string()),
        );
        use_case.execute(ResourceKind::Gallery, id).await.unwrap();

        assert_eq!(repo.count(ResourceKind::Gallery).await.unwrap(), 0);
        assert_eq!(*store.deleted.lock().unwrap(), vec!["gallery/site.jpg"]);
    }

    #[tokio::test]
    async fn test_object_failure_does_not_block_deletion() {
        let repo = Arc::new(InMemoryContentRepository::default());
        let id = seeded_gallery(&repo);
        let store = Arc::new(RecordingStore {
            fail: true,
            ..Default::default()
        });

        let use_case = DeleteItemUseCase::new(
            repo.clone(),
            Some(store),
            Some(BASE.to_string()),
        );

        assert!(use_case.execute(ResourceKind::Gallery, id).await.is_ok());
        assert_eq!(repo.count(ResourceKind::Gallery).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_external_url_left_alone() {
        let repo = Arc::new(InMemoryContentRepository::default());
        let record = ContentRecord::new(
            ResourceKind::Gallery,
            validate(
                ResourceKind::Gallery,
                json!({"imageUrl": "https://elsewhere.example.com/pic.jpg"}),
            )
            .unwrap(),
        );
        let id = record.id;
        repo.seed(record);
        let store = Arc::new(RecordingStore::default());

        let use_case = DeleteItemUseCase::new(
            repo,
            Some(store.clone()),
            Some(BASE.to_string()),
        );
        use_case.execute(ResourceKind::Gallery, id).await.unwrap();

        assert!(store.deleted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let repo = Arc::new(InMemoryContentRepository::default());
        let use_case: DeleteItemUseCase<_, RecordingStore> =
            DeleteItemUseCase::new(repo, None, None);

        let err = use_case
            .execute(ResourceKind::Gallery, ContentId::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::NotFound));
    }
}
