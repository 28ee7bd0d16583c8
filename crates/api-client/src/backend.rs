//! Backend trait implementations over the HTTP client.
//!
//! Each core `*Api` trait maps onto a resource path. Methods delegate to the
//! request helpers on [`ApiClient`] and convert [`ApiError`] into the core
//! error type via `?`.

use async_trait::async_trait;
use serde::Serialize;

use madwallet_core::catalog::{
    CatalogApi, Category, CategoryUpdate, NewCategory, NewPaymentMethod, NewStatus, PaymentMethod,
    PaymentMethodUpdate, Status, StatusUpdate,
};
use madwallet_core::dashboard::{DashboardApi, DashboardSummary};
use madwallet_core::expenses::{Expense, ExpenseUpdate, ExpensesApi, NewExpense, PaymentResult};
use madwallet_core::purchases::{NewPurchase, Purchase, PurchaseUpdate, PurchasesApi};
use madwallet_core::recurring_bills::{
    NewRecurringBill, RecurringBill, RecurringBillUpdate, RecurringBillsApi,
};
use madwallet_core::transactions::{
    IncomeResult, NewIncome, NewTransfer, TransactionsApi, TransferResult, WalletTransaction,
};
use madwallet_core::wallets::{NewWallet, Wallet, WalletUpdate, WalletsApi};
use madwallet_core::{EntityId, Result};

use crate::client::ApiClient;

/// Body for `POST /expenses/{id}/pay`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PayRequest {
    wallet_id: EntityId,
}

#[async_trait]
impl CatalogApi for ApiClient {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.get("/categories").await?)
    }

    async fn create_category(&self, new_category: NewCategory) -> Result<Category> {
        Ok(self.post("/categories", &new_category).await?)
    }

    async fn update_category(&self, update: CategoryUpdate) -> Result<Category> {
        Ok(self.put(&format!("/categories/{}", update.id), &update).await?)
    }

    async fn delete_category(&self, category_id: EntityId) -> Result<()> {
        Ok(self.delete(&format!("/categories/{category_id}")).await?)
    }

    async fn list_statuses(&self) -> Result<Vec<Status>> {
        Ok(self.get("/statuses").await?)
    }

    async fn create_status(&self, new_status: NewStatus) -> Result<Status> {
        Ok(self.post("/statuses", &new_status).await?)
    }

    async fn update_status(&self, update: StatusUpdate) -> Result<Status> {
        Ok(self.put(&format!("/statuses/{}", update.id), &update).await?)
    }

    async fn delete_status(&self, status_id: EntityId) -> Result<()> {
        Ok(self.delete(&format!("/statuses/{status_id}")).await?)
    }

    async fn list_payment_methods(&self) -> Result<Vec<PaymentMethod>> {
        Ok(self.get("/payment-methods").await?)
    }

    async fn create_payment_method(&self, new_method: NewPaymentMethod) -> Result<PaymentMethod> {
        Ok(self.post("/payment-methods", &new_method).await?)
    }

    async fn update_payment_method(&self, update: PaymentMethodUpdate) -> Result<PaymentMethod> {
        Ok(self
            .put(&format!("/payment-methods/{}", update.id), &update)
            .await?)
    }

    async fn delete_payment_method(&self, payment_method_id: EntityId) -> Result<()> {
        Ok(self
            .delete(&format!("/payment-methods/{payment_method_id}"))
            .await?)
    }
}

#[async_trait]
impl WalletsApi for ApiClient {
    async fn list_wallets(&self) -> Result<Vec<Wallet>> {
        Ok(self.get("/wallets").await?)
    }

    async fn create_wallet(&self, new_wallet: NewWallet) -> Result<Wallet> {
        Ok(self.post("/wallets", &new_wallet).await?)
    }

    async fn update_wallet(&self, update: WalletUpdate) -> Result<Wallet> {
        Ok(self.put(&format!("/wallets/{}", update.id), &update).await?)
    }
}

#[async_trait]
impl TransactionsApi for ApiClient {
    async fn list_transactions(&self) -> Result<Vec<WalletTransaction>> {
        Ok(self.get("/wallet-transactions").await?)
    }

    async fn record_income(&self, income: NewIncome) -> Result<IncomeResult> {
        Ok(self.post("/wallet-transactions/income", &income).await?)
    }

    async fn transfer(&self, transfer: NewTransfer) -> Result<TransferResult> {
        Ok(self.post("/wallet-transactions/transfer", &transfer).await?)
    }
}

#[async_trait]
impl ExpensesApi for ApiClient {
    async fn list_expenses(&self) -> Result<Vec<Expense>> {
        Ok(self.get("/expenses").await?)
    }

    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense> {
        Ok(self.post("/expenses", &new_expense).await?)
    }

    async fn update_expense(&self, update: ExpenseUpdate) -> Result<Expense> {
        Ok(self.put(&format!("/expenses/{}", update.id), &update).await?)
    }

    async fn delete_expense(&self, expense_id: EntityId) -> Result<()> {
        Ok(self.delete(&format!("/expenses/{expense_id}")).await?)
    }

    async fn pay_expense(
        &self,
        expense_id: EntityId,
        wallet_id: EntityId,
    ) -> Result<PaymentResult> {
        let body = PayRequest { wallet_id };
        Ok(self
            .post(&format!("/expenses/{expense_id}/pay"), &body)
            .await?)
    }
}

#[async_trait]
impl PurchasesApi for ApiClient {
    async fn list_purchases(&self) -> Result<Vec<Purchase>> {
        Ok(self.get("/purchases").await?)
    }

    async fn create_purchase(&self, new_purchase: NewPurchase) -> Result<Purchase> {
        Ok(self.post("/purchases", &new_purchase).await?)
    }

    async fn update_purchase(&self, update: PurchaseUpdate) -> Result<Purchase> {
        Ok(self.put(&format!("/purchases/{}", update.id), &update).await?)
    }

    async fn delete_purchase(&self, purchase_id: EntityId) -> Result<()> {
        Ok(self.delete(&format!("/purchases/{purchase_id}")).await?)
    }
}

#[async_trait]
impl RecurringBillsApi for ApiClient {
    async fn list_recurring_bills(&self) -> Result<Vec<RecurringBill>> {
        Ok(self.get("/recurring-bills").await?)
    }

    async fn create_recurring_bill(&self, new_bill: NewRecurringBill) -> Result<RecurringBill> {
        Ok(self.post("/recurring-bills", &new_bill).await?)
    }

    async fn update_recurring_bill(&self, update: RecurringBillUpdate) -> Result<RecurringBill> {
        Ok(self
            .put(&format!("/recurring-bills/{}", update.id), &update)
            .await?)
    }

    async fn delete_recurring_bill(&self, bill_id: EntityId) -> Result<()> {
        Ok(self.delete(&format!("/recurring-bills/{bill_id}")).await?)
    }
}

#[async_trait]
impl DashboardApi for ApiClient {
    async fn get_summary(&self) -> Result<DashboardSummary> {
        Ok(self.get("/dashboard/summary").await?)
    }
}
