//! Expense backend and service traits.

use async_trait::async_trait;

use super::expenses_model::{Expense, ExpenseUpdate, NewExpense, PaymentResult};
use crate::errors::Result;
use crate::ids::EntityId;
use crate::insights::{CategoryTotal, MonthGroup, UrgencyGroups};

/// Remote contract for expenses.
#[async_trait]
pub trait ExpensesApi: Send + Sync {
    async fn list_expenses(&self) -> Result<Vec<Expense>>;
    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense>;
    async fn update_expense(&self, update: ExpenseUpdate) -> Result<Expense>;
    async fn delete_expense(&self, expense_id: EntityId) -> Result<()>;
    async fn pay_expense(&self, expense_id: EntityId, wallet_id: EntityId)
        -> Result<PaymentResult>;
}

/// Service contract for the cached expense collection, its optimistic
/// mutations, and the derived views the dashboard consumes.
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    /// Refreshes the expense list, reusing a fresh cache unless forced.
    async fn refresh(&self, force_refresh: bool);

    async fn expenses(&self) -> Vec<Expense>;

    async fn get_expense(&self, expense_id: EntityId) -> Option<Expense>;

    /// Creates an expense optimistically: a placeholder row appears at once
    /// and is replaced by the server row, or rolled back on failure.
    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense>;

    /// Updates an expense optimistically by splicing the edited fields in
    /// place.
    async fn update_expense(&self, update: ExpenseUpdate) -> Result<Expense>;

    /// Deletes an expense optimistically; the row disappears at once and
    /// comes back on failure.
    async fn delete_expense(&self, expense_id: EntityId) -> Result<()>;

    /// Pays an expense from a wallet. The wallet must be usable and hold at
    /// least the expense amount; both checks run before any store write.
    async fn pay_expense(&self, expense_id: EntityId, wallet_id: EntityId)
        -> Result<PaymentResult>;

    /// Unpaid expenses partitioned by due-date urgency against today.
    async fn urgency_groups(&self) -> UrgencyGroups;

    /// Per-category totals for the current calendar month.
    async fn current_month_category_totals(&self) -> Vec<CategoryTotal>;

    /// Expenses grouped by calendar month, newest first.
    async fn month_groups(&self) -> Vec<MonthGroup>;

    /// Unpaid expenses due within the next `days` days, today inclusive.
    async fn upcoming_expenses(&self, days: u64) -> Vec<Expense>;
}
