//! Dashboard summary module - the one non-collection cache.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;

// Re-export the public interface
pub use dashboard_model::DashboardSummary;
pub use dashboard_service::DashboardService;
pub use dashboard_traits::{DashboardApi, DashboardServiceTrait};
