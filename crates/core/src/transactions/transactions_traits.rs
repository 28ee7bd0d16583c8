//! Wallet transaction backend and service traits.

use async_trait::async_trait;

use super::transactions_model::{
    IncomeResult, NewIncome, NewTransfer, TransferResult, WalletTransaction,
};
use crate::errors::Result;

/// Remote contract for wallet transactions.
#[async_trait]
pub trait TransactionsApi: Send + Sync {
    async fn list_transactions(&self) -> Result<Vec<WalletTransaction>>;
    async fn record_income(&self, income: NewIncome) -> Result<IncomeResult>;
    async fn transfer(&self, transfer: NewTransfer) -> Result<TransferResult>;
}

/// Service contract for the cached transaction collection and the compound
/// financial operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Refreshes the transaction list, reusing a fresh cache unless forced.
    async fn refresh(&self, force_refresh: bool);

    async fn transactions(&self) -> Vec<WalletTransaction>;

    /// Records income into a wallet. The tentative transaction and adjusted
    /// balance appear immediately; a failed call rolls both stores back.
    async fn record_income(&self, income: NewIncome) -> Result<IncomeResult>;

    /// Transfers between two distinct wallets. Rejected synchronously when
    /// source and destination are the same wallet, before any cache write or
    /// network call.
    async fn transfer(&self, transfer: NewTransfer) -> Result<TransferResult>;
}
