//! Expense domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Category, PaymentMethod, Status};
use crate::constants::PAID_STATUS_NAME;
use crate::errors::{Error, Result, ValidationError};
use crate::ids::{EntityId, Identified};
use crate::purchases::Purchase;

/// A single expense row, with the denormalized references the backend ships
/// alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: EntityId,
    pub description: String,
    pub amount_cents: i64,
    pub category_id: EntityId,
    pub category: Option<Category>,
    pub status_id: Option<EntityId>,
    pub status: Option<Status>,
    pub payment_method_id: Option<EntityId>,
    pub payment_method: Option<PaymentMethod>,
    pub date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub purchase_id: Option<EntityId>,
    pub purchase: Option<Box<Purchase>>,
    pub installment_number: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// True when this expense carries the status whose display name marks it
    /// paid. There is no boolean on the wire; the name is the whole contract.
    pub fn is_paid(&self) -> bool {
        self.status
            .as_ref()
            .is_some_and(|status| status.name == PAID_STATUS_NAME)
    }
}

impl Identified for Expense {
    fn entity_id(&self) -> EntityId {
        self.id
    }
}

/// Input model for creating an expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub description: String,
    pub amount_cents: i64,
    pub category_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<EntityId>,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl NewExpense {
    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Expense description cannot be empty".to_string(),
            )));
        }
        if self.amount_cents < 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Expense amount cannot be negative".to_string(),
            )));
        }
        if !self.category_id.is_confirmed() {
            return Err(Error::Validation(ValidationError::MissingField(
                "categoryId".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    pub id: EntityId,
    pub description: String,
    pub amount_cents: i64,
    pub category_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<EntityId>,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl ExpenseUpdate {
    pub fn validate(&self) -> Result<()> {
        if !self.id.is_confirmed() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Expense ID is required for updates".to_string(),
            )));
        }
        if self.description.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Expense description cannot be empty".to_string(),
            )));
        }
        if self.amount_cents < 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Expense amount cannot be negative".to_string(),
            )));
        }
        Ok(())
    }

    /// Splices the edited fields into an existing row, leaving the server-owned
    /// fields (denormalized references, timestamps) untouched until the server
    /// answers with the canonical row.
    pub fn apply_to(&self, expense: &mut Expense) {
        expense.description = self.description.clone();
        expense.amount_cents = self.amount_cents;
        expense.category_id = self.category_id;
        expense.status_id = self.status_id;
        expense.payment_method_id = self.payment_method_id;
        expense.date = self.date;
        expense.due_date = self.due_date;
    }
}

/// Server response to paying an expense from a wallet: the expense with its
/// new status and the wallet with its decremented balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
    pub expense: Expense,
    pub wallet: crate::wallets::Wallet,
}
