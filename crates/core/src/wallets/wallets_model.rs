//! Wallet domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::ids::{EntityId, Identified};

/// A wallet holding a running balance in cents. Balances may go negative;
/// the backend does not enforce an overdraft rule and neither do we, except
/// for the pay-expense flow which requires sufficient funds up front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub wallet_type: String,
    pub balance_cents: i64,
    pub currency: String,
    pub is_active: bool,
    pub is_deleted: bool,
    pub user_id: EntityId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Wallet {
    /// True when the wallet can receive income or pay expenses.
    pub fn is_usable(&self) -> bool {
        self.is_active && !self.is_deleted
    }
}

impl Identified for Wallet {
    fn entity_id(&self) -> EntityId {
        self.id
    }
}

/// Input model for creating a wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWallet {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub wallet_type: String,
    pub balance_cents: i64,
    pub currency: String,
}

impl NewWallet {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Wallet name cannot be empty".to_string(),
            )));
        }
        if self.wallet_type.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Wallet type cannot be empty".to_string(),
            )));
        }
        if self.currency.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Wallet currency cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating a wallet. The balance is not editable here; it
/// only moves through transactions and expense payments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletUpdate {
    pub id: EntityId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub wallet_type: String,
    pub is_active: bool,
}

impl WalletUpdate {
    pub fn validate(&self) -> Result<()> {
        if !self.id.is_confirmed() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Wallet ID is required for updates".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Wallet name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }

    /// Splices the edited fields into an existing row.
    pub fn apply_to(&self, wallet: &mut Wallet) {
        wallet.name = self.name.clone();
        wallet.description = self.description.clone();
        wallet.wallet_type = self.wallet_type.clone();
        wallet.is_active = self.is_active;
    }
}
