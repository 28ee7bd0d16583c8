use std::sync::Arc;

use chrono::{Datelike, Local, Utc};
use log::debug;

use super::expenses_model::{Expense, ExpenseUpdate, NewExpense, PaymentResult};
use super::expenses_traits::{ExpenseServiceTrait, ExpensesApi};
use crate::cache::CollectionStore;
use crate::catalog::CatalogServiceTrait;
use crate::constants::DEFAULT_CACHE_TTL_MINUTES;
use crate::errors::{Error, Result, ValidationError};
use crate::events::{EventSink, StoreEvent};
use crate::ids::{EntityId, PlaceholderIds};
use crate::insights::{
    calculate_category_totals, group_by_month, group_by_urgency, upcoming_expenses, CategoryTotal,
    MonthGroup, UrgencyGroups,
};
use crate::optimistic::OptimisticMutation;
use crate::wallets::WalletService;

/// Service for the cached expense collection and its derived views.
pub struct ExpenseService {
    api: Arc<dyn ExpensesApi>,
    event_sink: Arc<dyn EventSink>,
    placeholder_ids: Arc<PlaceholderIds>,
    catalog: Arc<dyn CatalogServiceTrait>,
    wallets: Arc<WalletService>,
    expenses: CollectionStore<Expense>,
}

impl ExpenseService {
    /// Creates a new ExpenseService instance
    pub fn new(
        api: Arc<dyn ExpensesApi>,
        event_sink: Arc<dyn EventSink>,
        placeholder_ids: Arc<PlaceholderIds>,
        catalog: Arc<dyn CatalogServiceTrait>,
        wallets: Arc<WalletService>,
    ) -> Self {
        let expenses = {
            let api = api.clone();
            CollectionStore::new("expenses", DEFAULT_CACHE_TTL_MINUTES, move || {
                let api = api.clone();
                async move { api.list_expenses().await }
            })
        };

        Self {
            api,
            event_sink,
            placeholder_ids,
            catalog,
            wallets,
            expenses,
        }
    }

    /// Synthesizes the placeholder row shown until the server confirms. The
    /// denormalized references come from the reference caches so the row
    /// renders with its category chip straight away.
    async fn tentative_expense(&self, new_expense: &NewExpense) -> Expense {
        let now = Utc::now();
        let category = self.catalog.get_category(new_expense.category_id).await;
        let status = match new_expense.status_id {
            Some(status_id) => self.catalog.get_status(status_id).await,
            None => None,
        };
        let payment_method = match new_expense.payment_method_id {
            Some(method_id) => self.catalog.get_payment_method(method_id).await,
            None => None,
        };

        Expense {
            id: self.placeholder_ids.next(),
            description: new_expense.description.clone(),
            amount_cents: new_expense.amount_cents,
            category_id: new_expense.category_id,
            category,
            status_id: new_expense.status_id,
            status,
            payment_method_id: new_expense.payment_method_id,
            payment_method,
            date: new_expense.date,
            due_date: new_expense.due_date,
            purchase_id: None,
            purchase: None,
            installment_number: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait::async_trait]
impl ExpenseServiceTrait for ExpenseService {
    async fn refresh(&self, force_refresh: bool) {
        self.expenses.fetch(force_refresh).await;
    }

    async fn expenses(&self) -> Vec<Expense> {
        self.expenses.items().await
    }

    async fn get_expense(&self, expense_id: EntityId) -> Option<Expense> {
        self.expenses.find(expense_id).await
    }

    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense> {
        new_expense.validate()?;

        let tentative = self.tentative_expense(&new_expense).await;
        debug!("[Expenses] creating expense, placeholder {}", tentative.id);

        let mut mutation = OptimisticMutation::new("expense-create");
        mutation.snapshot(&self.expenses).await;
        self.expenses.prepend(tentative.clone()).await;

        let created = mutation.commit(self.api.create_expense(new_expense)).await?;
        self.expenses.replace(tentative.id, created.clone()).await;

        self.event_sink.emit_batch(vec![
            StoreEvent::expenses_changed(vec![created.id]),
            StoreEvent::SummaryStale,
        ]);
        Ok(created)
    }

    async fn update_expense(&self, update: ExpenseUpdate) -> Result<Expense> {
        update.validate()?;

        let mut mutation = OptimisticMutation::new("expense-update");
        mutation.snapshot(&self.expenses).await;
        if let Some(mut expense) = self.expenses.find(update.id).await {
            update.apply_to(&mut expense);
            self.expenses.replace(update.id, expense).await;
        }

        let updated = mutation.commit(self.api.update_expense(update)).await?;
        self.expenses.replace(updated.id, updated.clone()).await;

        self.event_sink.emit_batch(vec![
            StoreEvent::expenses_changed(vec![updated.id]),
            StoreEvent::SummaryStale,
        ]);
        Ok(updated)
    }

    async fn delete_expense(&self, expense_id: EntityId) -> Result<()> {
        let mut mutation = OptimisticMutation::new("expense-delete");
        mutation.snapshot(&self.expenses).await;
        self.expenses.remove(expense_id).await;

        mutation.commit(self.api.delete_expense(expense_id)).await?;

        self.event_sink.emit_batch(vec![
            StoreEvent::expenses_changed(vec![expense_id]),
            StoreEvent::SummaryStale,
        ]);
        Ok(())
    }

    async fn pay_expense(
        &self,
        expense_id: EntityId,
        wallet_id: EntityId,
    ) -> Result<PaymentResult> {
        let expense = self
            .expenses
            .find(expense_id)
            .await
            .ok_or_else(|| Error::NotFound(format!("Expense {expense_id}")))?;
        if expense.is_paid() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Expense is already paid".to_string(),
            )));
        }

        let wallet = self
            .wallets
            .store()
            .find(wallet_id)
            .await
            .ok_or_else(|| Error::NotFound(format!("Wallet {wallet_id}")))?;
        if !wallet.is_usable() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Wallet is inactive or deleted".to_string(),
            )));
        }
        if wallet.balance_cents < expense.amount_cents {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Insufficient wallet balance".to_string(),
            )));
        }

        debug!("[Expenses] paying {expense_id} from wallet {wallet_id}");

        let mut mutation = OptimisticMutation::new("expense-pay");
        mutation.snapshot(&self.expenses).await;
        mutation.snapshot(self.wallets.store()).await;

        // Tentative paid status comes from the cached catalog; without a
        // "Paid" entry the status swap waits for the server's answer.
        if let Some(paid) = self.catalog.paid_status().await {
            let mut tentative = expense.clone();
            tentative.status_id = Some(paid.id);
            tentative.status = Some(paid);
            self.expenses.replace(expense_id, tentative).await;
        }
        let mut debited = wallet.clone();
        debited.balance_cents -= expense.amount_cents;
        self.wallets.store().replace(wallet_id, debited).await;

        let confirmed = mutation
            .commit(self.api.pay_expense(expense_id, wallet_id))
            .await?;

        self.expenses
            .replace(expense_id, confirmed.expense.clone())
            .await;
        self.wallets
            .store()
            .replace(confirmed.wallet.id, confirmed.wallet.clone())
            .await;

        self.event_sink.emit_batch(vec![
            StoreEvent::expenses_changed(vec![confirmed.expense.id]),
            StoreEvent::wallets_changed(vec![confirmed.wallet.id]),
            StoreEvent::SummaryStale,
        ]);
        Ok(confirmed)
    }

    async fn urgency_groups(&self) -> UrgencyGroups {
        let today = Local::now().date_naive();
        group_by_urgency(&self.expenses.items().await, today)
    }

    async fn current_month_category_totals(&self) -> Vec<CategoryTotal> {
        let today = Local::now().date_naive();
        let this_month: Vec<Expense> = self
            .expenses
            .items()
            .await
            .into_iter()
            .filter(|expense| {
                expense.date.year() == today.year() && expense.date.month() == today.month()
            })
            .collect();
        calculate_category_totals(&this_month)
    }

    async fn month_groups(&self) -> Vec<MonthGroup> {
        group_by_month(&self.expenses.items().await)
    }

    async fn upcoming_expenses(&self, days: u64) -> Vec<Expense> {
        let today = Local::now().date_naive();
        upcoming_expenses(&self.expenses.items().await, today, days)
    }
}
