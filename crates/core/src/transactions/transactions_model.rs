//! Wallet transaction domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::ids::{EntityId, Identified};
use crate::wallets::Wallet;

/// Kind of wallet transaction. On the wire these travel as the snake_case
/// strings the backend has always used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Income,
    TransferIn,
    TransferOut,
}

/// A wallet transaction with the resulting balance as the server snapshotted
/// it. `balance_after_cents` is never recomputed locally once confirmed; the
/// only locally-derived value is the tentative placeholder's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletTransaction {
    pub id: EntityId,
    pub description: String,
    pub amount_cents: i64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub date: NaiveDate,
    pub wallet_id: EntityId,
    pub wallet: Option<Wallet>,
    pub transfer_wallet_id: Option<EntityId>,
    pub balance_after_cents: i64,
    pub is_deleted: bool,
    pub user_id: EntityId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identified for WalletTransaction {
    fn entity_id(&self) -> EntityId {
        self.id
    }
}

/// Input model for recording income into a wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIncome {
    pub description: String,
    pub amount_cents: i64,
    pub date: NaiveDate,
    pub wallet_id: EntityId,
}

impl NewIncome {
    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Transaction description cannot be empty".to_string(),
            )));
        }
        if self.amount_cents <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Income amount must be positive".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for transferring between two wallets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransfer {
    pub description: String,
    pub amount_cents: i64,
    pub date: NaiveDate,
    pub from_wallet_id: EntityId,
    pub to_wallet_id: EntityId,
}

impl NewTransfer {
    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Transaction description cannot be empty".to_string(),
            )));
        }
        if self.amount_cents <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Transfer amount must be positive".to_string(),
            )));
        }
        if self.from_wallet_id == self.to_wallet_id {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Cannot transfer to the same wallet".to_string(),
            )));
        }
        Ok(())
    }
}

/// Server response to recording income: the confirmed transaction and the
/// wallet with its new balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeResult {
    pub transaction: WalletTransaction,
    pub wallet: Wallet,
}

/// Server response to a transfer: exactly two confirmed transactions and the
/// two wallets with their new balances.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferResult {
    pub outgoing: WalletTransaction,
    pub incoming: WalletTransaction,
    pub from_wallet: Wallet,
    pub to_wallet: Wallet,
}
