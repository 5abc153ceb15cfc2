//! List Items Use Case

use std::sync::Arc;

use crate::domain::entity::ContentRecord;
use crate::domain::kind::ResourceKind;
use crate::domain::repository::ContentRepository;
use crate::error::ContentResult;

/// List records of one kind, ordered for rendering.
pub struct ListItemsUseCase<R>
where
    R: ContentRepository + Send + Sync + 'static,
{
    repo: Arc<R>,
}

impl<R> ListItemsUseCase<R>
where
    R: ContentRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        kind: ResourceKind,
        active_only: bool,
    ) -> ContentResult<Vec<ContentRecord>> {
        self.repo.list(kind, active_only).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payload::validate;
    use crate::infra::memory::InMemoryContentRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_active_filter_and_order() {
        let repo = InMemoryContentRepository::default();

        for (order, active) in [(2, true), (1, true), (3, false)] {
            let payload = validate(
                ResourceKind::Logos,
                json!({"name": format!("logo-{order}"), "imageUrl": "https://a/l.png",
                       "order": order, "isActive": active}),
            )
            .unwrap();
            repo.seed(ContentRecord::new(ResourceKind::Logos, payload));
        }

        let use_case = ListItemsUseCase::new(Arc::new(repo));

        let all = use_case.execute(ResourceKind::Logos, false).await.unwrap();
        assert_eq!(all.len(), 3);
        // Ordered by display order
        assert_eq!(all[0].sort_order, 1);
        assert_eq!(all[2].sort_order, 3);

        let active = use_case.execute(ResourceKind::Logos, true).await.unwrap();
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|r| r.is_active));
    }

    #[tokio::test]
    async fn test_order_collision_resolved_by_insertion() {
        let repo = InMemoryContentRepository::default();
        for name in ["first", "second"] {
            let payload = validate(
                ResourceKind::Logos,
                json!({"name": name, "imageUrl": "https://a/l.png", "order": 5}),
            )
            .unwrap();
            repo.seed(ContentRecord::new(ResourceKind::Logos, payload));
        }

        let use_case = ListItemsUseCase::new(Arc::new(repo));
        let all = use_case.execute(ResourceKind::Logos, false).await.unwrap();
        assert_eq!(all[0].data["name"], "first");
        assert_eq!(all[1].data["name"], "second");
    }
}
