//! Recurring bill domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Category, PaymentMethod, Status};
use crate::errors::{Error, Result, ValidationError};
use crate::expenses::Expense;
use crate::ids::{EntityId, Identified};

/// How often a recurring bill generates an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillFrequency {
    #[default]
    Monthly,
    Quarterly,
    Annual,
}

/// A recurring bill. Expense generation runs server-side on the bill's
/// schedule; `next_due_date` and `last_generated` are server-owned bookmarks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecurringBill {
    pub id: EntityId,
    pub user_id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub amount_cents: i64,
    pub frequency: BillFrequency,
    pub day_of_month: u32,
    pub category_id: EntityId,
    pub category: Option<Category>,
    pub status_id: EntityId,
    pub status: Option<Status>,
    pub payment_method_id: Option<EntityId>,
    pub payment_method: Option<PaymentMethod>,
    pub start_date: NaiveDate,
    pub next_due_date: NaiveDate,
    pub last_generated: Option<NaiveDate>,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expenses: Option<Vec<Expense>>,
}

impl Identified for RecurringBill {
    fn entity_id(&self) -> EntityId {
        self.id
    }
}

/// Input model for creating a recurring bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecurringBill {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount_cents: i64,
    pub frequency: BillFrequency,
    pub day_of_month: u32,
    pub category_id: EntityId,
    pub status_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<EntityId>,
    pub start_date: NaiveDate,
}

impl NewRecurringBill {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Bill name cannot be empty".to_string(),
            )));
        }
        if self.amount_cents <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Bill amount must be positive".to_string(),
            )));
        }
        if !(1..=31).contains(&self.day_of_month) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Bill day of month must be between 1 and 31".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating a recurring bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringBillUpdate {
    pub id: EntityId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount_cents: i64,
    pub frequency: BillFrequency,
    pub day_of_month: u32,
    pub category_id: EntityId,
    pub status_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<EntityId>,
    pub is_active: bool,
}

impl RecurringBillUpdate {
    pub fn validate(&self) -> Result<()> {
        if !self.id.is_confirmed() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Bill ID is required for updates".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Bill name cannot be empty".to_string(),
            )));
        }
        if self.amount_cents <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Bill amount must be positive".to_string(),
            )));
        }
        if !(1..=31).contains(&self.day_of_month) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Bill day of month must be between 1 and 31".to_string(),
            )));
        }
        Ok(())
    }
}
