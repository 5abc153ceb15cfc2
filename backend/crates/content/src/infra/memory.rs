//! In-memory repository for use-case tests
//!
//! Insertion order is preserved so the order-collision tie-break can be
//! asserted against it.

use std::sync::{Arc, Mutex};

use shared::id::ContentId;

use crate::domain::entity::ContentRecord;
use crate::domain::kind::ResourceKind;
use crate::domain::repository::ContentRepository;
use crate::error::ContentResult;

#[derive(Clone, Default)]
pub struct InMemoryContentRepository {
    records: Arc<Mutex<Vec<ContentRecord>>>,
}

impl InMemoryContentRepository {
    pub fn seed(&self, record: ContentRecord) {
        self.records.lock().unwrap().push(record);
    }
}

impl ContentRepository for InMemoryContentRepository {
    async fn list(
        &self,
        kind: ResourceKind,
        active_only: bool,
    ) -> ContentResult<Vec<ContentRecord>> {
        let mut records: Vec<ContentRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.kind == kind && (!active_only || r.is_active))
            .cloned()
            .collect();
        // Stable sort keeps insertion order for equal display orders
        records.sort_by_key(|r| r.sort_order);
        Ok(records)
    }

    async fn find(
        &self,
        kind: ResourceKind,
        id: &ContentId,
    ) -> ContentResult<Option<ContentRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.kind == kind && &r.id == id)
            .cloned())
    }

    async fn insert(&self, record: &ContentRecord) -> ContentResult<()> {
        self.seed(record.clone());
        Ok(())
    }

    async fn update(&self, record: &ContentRecord) -> ContentResult<bool> {
        let mut records = self.records.lock().unwrap();
        match records
            .iter_mut()
            .find(|r| r.kind == record.kind && r.id == record.id)
        {
            Some(stored) => {
                *stored = record.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(
        &self,
        kind: ResourceKind,
        id: &ContentId,
    ) -> ContentResult<Option<ContentRecord>> {
        let mut records = self.records.lock().unwrap();
        let position = records.iter().position(|r| r.kind == kind && &r.id == id);
        Ok(position.map(|i| records.remove(i)))
    }

    async fn count(&self, kind: ResourceKind) -> ContentResult<i64> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.kind == kind)
            .count() as i64)
    }
}
