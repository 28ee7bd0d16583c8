//! Dashboard summary model.

use serde::{Deserialize, Serialize};

/// Headline figures the backend aggregates across all of a user's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_balance_cents: i64,
    pub total_unpaid_cents: i64,
    pub unpaid_count: u64,
}
