//! Dashboard Statistics Use Case
//!
//! The five per-kind counts have no ordering dependency, so they are fetched
//! concurrently and merged.

use std::sync::Arc;

use crate::domain::kind::ResourceKind;
use crate::domain::repository::ContentRepository;
use crate::error::ContentResult;

/// Per-kind record counts for the dashboard landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsOutput {
    pub logos: i64,
    pub projects: i64,
    pub testimonials: i64,
    pub services: i64,
    pub gallery: i64,
}

impl StatsOutput {
    pub fn total(&self) -> i64 {
        self.logos + self.projects + self.testimonials + self.services + self.gallery
    }
}

pub struct DashboardStatsUseCase<R>
where
    R: ContentRepository + Send + Sync + 'static,
{
    repo: Arc<R>,
}

impl<R> DashboardStatsUseCase<R>
where
    R: ContentRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> ContentResult<StatsOutput> {
        let (logos, projects, testimonials, services, gallery) = tokio::join!(
            self.repo.count(ResourceKind::Logos),
            self.repo.count(ResourceKind::Projects),
            self.repo.count(ResourceKind::Testimonials),
            self.repo.count(ResourceKind::Services),
            self.repo.count(ResourceKind::Gallery),
        );

        Ok(StatsOutput {
            logos: logos?,
            projects: projects?,
            testimonials: testimonials?,
            services: services?,
            gallery: gallery?,
        })
    }
}
