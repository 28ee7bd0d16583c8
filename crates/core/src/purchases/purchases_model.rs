//! Purchase (installment plan) domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Category, PaymentMethod, Status};
use crate::errors::{Error, Result, ValidationError};
use crate::expenses::Expense;
use crate::ids::{EntityId, Identified};

/// An installment plan. The backend generates one expense per installment;
/// the generated rows arrive denormalized under `expenses` for the detail
/// drawer's grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: EntityId,
    pub description: String,
    /// Total plan amount in cents, split across the installments server-side.
    pub total_amount_cents: i64,
    pub installment_count: u32,
    pub frequency: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub category_id: EntityId,
    pub category: Option<Category>,
    pub status_id: EntityId,
    pub default_status: Option<Status>,
    pub payment_method_id: Option<EntityId>,
    pub payment_method: Option<PaymentMethod>,
    pub expenses: Option<Vec<Expense>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identified for Purchase {
    fn entity_id(&self) -> EntityId {
        self.id
    }
}

/// Input model for creating a purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPurchase {
    pub description: String,
    pub total_amount_cents: i64,
    pub installment_count: u32,
    pub frequency: String,
    pub start_date: NaiveDate,
    pub category_id: EntityId,
    pub status_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<EntityId>,
}

impl NewPurchase {
    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Purchase description cannot be empty".to_string(),
            )));
        }
        if self.total_amount_cents <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Purchase amount must be positive".to_string(),
            )));
        }
        if self.installment_count == 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Purchase must have at least one installment".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating a purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseUpdate {
    pub id: EntityId,
    pub description: String,
    pub category_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<EntityId>,
}

impl PurchaseUpdate {
    pub fn validate(&self) -> Result<()> {
        if !self.id.is_confirmed() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Purchase ID is required for updates".to_string(),
            )));
        }
        if self.description.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Purchase description cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}
