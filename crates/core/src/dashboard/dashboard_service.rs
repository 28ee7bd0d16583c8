use std::sync::Arc;

use super::dashboard_model::DashboardSummary;
use super::dashboard_traits::{DashboardApi, DashboardServiceTrait};
use crate::cache::TimedCache;
use crate::constants::DEFAULT_CACHE_TTL_MINUTES;

/// Service for the cached dashboard summary.
pub struct DashboardService {
    summary: TimedCache<DashboardSummary>,
}

impl DashboardService {
    /// Creates a new DashboardService instance
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        let summary = TimedCache::new("dashboard_summary", DEFAULT_CACHE_TTL_MINUTES, move || {
            let api = api.clone();
            async move { api.get_summary().await }
        });

        Self { summary }
    }
}

#[async_trait::async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn refresh(&self, force_refresh: bool) {
        self.summary.fetch(force_refresh).await;
    }

    async fn summary(&self) -> Option<DashboardSummary> {
        self.summary.get().await
    }

    async fn set_summary(&self, summary: DashboardSummary) {
        self.summary.set(summary).await;
    }

    async fn last_error(&self) -> Option<String> {
        self.summary.last_error().await
    }
}
