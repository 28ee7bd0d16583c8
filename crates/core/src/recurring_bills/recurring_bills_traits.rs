//! Recurring bill backend and service traits.

use async_trait::async_trait;

use super::recurring_bills_model::{NewRecurringBill, RecurringBill, RecurringBillUpdate};
use crate::errors::Result;
use crate::ids::EntityId;

/// Remote contract for recurring bills.
#[async_trait]
pub trait RecurringBillsApi: Send + Sync {
    async fn list_recurring_bills(&self) -> Result<Vec<RecurringBill>>;
    async fn create_recurring_bill(&self, new_bill: NewRecurringBill) -> Result<RecurringBill>;
    async fn update_recurring_bill(&self, update: RecurringBillUpdate) -> Result<RecurringBill>;
    async fn delete_recurring_bill(&self, bill_id: EntityId) -> Result<()>;
}

/// Service contract for the cached recurring-bill collection. Mutations are
/// passthrough with a forced refresh, like purchases: generation bookmarks
/// (`next_due_date`, `last_generated`) are server-owned.
#[async_trait]
pub trait RecurringBillServiceTrait: Send + Sync {
    async fn refresh(&self, force_refresh: bool);

    async fn recurring_bills(&self) -> Vec<RecurringBill>;

    async fn get_recurring_bill(&self, bill_id: EntityId) -> Option<RecurringBill>;

    async fn create_recurring_bill(&self, new_bill: NewRecurringBill) -> Result<RecurringBill>;
    async fn update_recurring_bill(&self, update: RecurringBillUpdate) -> Result<RecurringBill>;
    async fn delete_recurring_bill(&self, bill_id: EntityId) -> Result<()>;
}
