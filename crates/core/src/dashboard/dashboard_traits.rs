//! Dashboard backend and service traits.

use async_trait::async_trait;

use super::dashboard_model::DashboardSummary;
use crate::errors::Result;

/// Remote contract for the dashboard summary.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn get_summary(&self) -> Result<DashboardSummary>;
}

/// Service contract for the cached summary. Consumers listening for
/// `SummaryStale` events call `refresh(true)` here.
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    async fn refresh(&self, force_refresh: bool);

    /// Last-known summary, `None` before the first successful fetch.
    async fn summary(&self) -> Option<DashboardSummary>;

    /// Splices in a locally-derived summary without a fetch.
    async fn set_summary(&self, summary: DashboardSummary);

    /// Error recorded by the most recent failed fetch.
    async fn last_error(&self) -> Option<String>;
}
