//! Content Repository Trait

use shared::id::ContentId;

use crate::domain::entity::ContentRecord;
use crate::domain::kind::ResourceKind;
use crate::error::ContentResult;

/// Persistence operations for content records.
///
/// `delete` returns the removed record so callers can clean up the backing
/// image objects after the row is gone.
#[trait_variant::make(ContentRepository: Send)]
pub trait LocalContentRepository {
    /// Records of one kind, ordered by display order then insertion time.
    async fn list(&self, kind: ResourceKind, active_only: bool)
    -> ContentResult<Vec<ContentRecord>>;

    async fn find(&self, kind: ResourceKind, id: &ContentId)
    -> ContentResult<Option<ContentRecord>>;

    async fn insert(&self, record: &ContentRecord) -> ContentResult<()>;

    /// Persist a modified record. Returns false when the id is unknown.
    async fn update(&self, record: &ContentRecord) -> ContentResult<bool>;

    /// Remove a record, returning it if it existed.
    async fn delete(
        &self,
        kind: ResourceKind,
        id: &ContentId,
    ) -> ContentResult<Option<ContentRecord>>;

    async fn count(&self, kind: ResourceKind) -> ContentResult<i64>;
}
