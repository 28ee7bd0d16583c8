//! Application service context.
//!
//! One instance of every service, constructed at startup and passed down
//! explicitly. There are no ambient globals: each cached collection is owned
//! by exactly one service here, and every reader and writer goes through it.

use std::sync::Arc;

use log::info;

use crate::catalog::{CatalogApi, CatalogService, CatalogServiceTrait};
use crate::dashboard::{DashboardApi, DashboardService, DashboardServiceTrait};
use crate::events::EventSink;
use crate::expenses::{ExpenseService, ExpenseServiceTrait, ExpensesApi};
use crate::ids::PlaceholderIds;
use crate::purchases::{PurchaseService, PurchaseServiceTrait, PurchasesApi};
use crate::recurring_bills::{RecurringBillService, RecurringBillServiceTrait, RecurringBillsApi};
use crate::transactions::{TransactionService, TransactionServiceTrait, TransactionsApi};
use crate::wallets::{WalletService, WalletServiceTrait, WalletsApi};

/// Everything the api-client must provide to wire a full context.
pub trait BackendApi:
    CatalogApi
    + ExpensesApi
    + WalletsApi
    + TransactionsApi
    + PurchasesApi
    + RecurringBillsApi
    + DashboardApi
    + 'static
{
}

impl<T> BackendApi for T where
    T: CatalogApi
        + ExpensesApi
        + WalletsApi
        + TransactionsApi
        + PurchasesApi
        + RecurringBillsApi
        + DashboardApi
        + 'static
{
}

/// The wired service graph.
pub struct ServiceContext {
    pub catalog: Arc<CatalogService>,
    pub wallets: Arc<WalletService>,
    pub expenses: Arc<ExpenseService>,
    pub transactions: Arc<TransactionService>,
    pub purchases: Arc<PurchaseService>,
    pub recurring_bills: Arc<RecurringBillService>,
    pub dashboard: Arc<DashboardService>,
}

impl ServiceContext {
    /// Wires every service from one backend implementation and one event
    /// sink. Services that adjust wallet balances share the wallet service's
    /// store; all placeholder ids come from one per-session allocator.
    pub fn new<A: BackendApi>(api: Arc<A>, event_sink: Arc<dyn EventSink>) -> Self {
        let placeholder_ids = Arc::new(PlaceholderIds::new());

        let catalog = Arc::new(CatalogService::new(api.clone(), event_sink.clone()));
        let wallets = Arc::new(WalletService::new(
            api.clone(),
            event_sink.clone(),
            placeholder_ids.clone(),
        ));
        let expenses = Arc::new(ExpenseService::new(
            api.clone(),
            event_sink.clone(),
            placeholder_ids.clone(),
            catalog.clone(),
            wallets.clone(),
        ));
        let transactions = Arc::new(TransactionService::new(
            api.clone(),
            event_sink.clone(),
            placeholder_ids,
            wallets.clone(),
        ));
        let purchases = Arc::new(PurchaseService::new(api.clone(), event_sink.clone()));
        let recurring_bills = Arc::new(RecurringBillService::new(api.clone(), event_sink));
        let dashboard = Arc::new(DashboardService::new(api));

        Self {
            catalog,
            wallets,
            expenses,
            transactions,
            purchases,
            recurring_bills,
            dashboard,
        }
    }

    /// Primes every cache concurrently. Failures stay soft: each cache
    /// records its own error and the context stays usable.
    pub async fn warm_up(&self) {
        info!("[Context] warming up caches");
        futures::join!(
            self.catalog.refresh(false),
            self.wallets.refresh(false),
            self.expenses.refresh(false),
            self.transactions.refresh(false),
            self.purchases.refresh(false),
            self.recurring_bills.refresh(false),
            self.dashboard.refresh(false),
        );
    }
}
