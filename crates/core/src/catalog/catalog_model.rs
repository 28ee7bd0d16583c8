//! Reference-data domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::PAID_STATUS_NAME;
use crate::errors::{Error, Result, ValidationError};
use crate::ids::{EntityId, Identified};

/// Expense category with its chart color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identified for Category {
    fn entity_id(&self) -> EntityId {
        self.id
    }
}

/// Expense status. Paid-ness is carried entirely by the display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub is_system: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Status {
    /// True when this is the status that marks an expense paid.
    pub fn is_paid_marker(&self) -> bool {
        self.name == PAID_STATUS_NAME
    }
}

impl Identified for Status {
    fn entity_id(&self) -> EntityId {
        self.id
    }
}

/// Payment method, optionally carrying card statement/due days of month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub method_type: String,
    pub description: Option<String>,
    pub statement_date: Option<u32>,
    pub payment_due_date: Option<u32>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identified for PaymentMethod {
    fn entity_id(&self) -> EntityId {
        self.id
    }
}

/// Input model for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: String,
}

impl NewCategory {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Category name cannot be empty".to_string(),
            )));
        }
        if self.color.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Category color cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub id: EntityId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: String,
}

impl CategoryUpdate {
    pub fn validate(&self) -> Result<()> {
        if !self.id.is_confirmed() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Category ID is required for updates".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Category name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for creating a status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStatus {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewStatus {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Status name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating a status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub id: EntityId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl StatusUpdate {
    pub fn validate(&self) -> Result<()> {
        if !self.id.is_confirmed() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Status ID is required for updates".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Status name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for creating a payment method.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPaymentMethod {
    pub name: String,
    #[serde(rename = "type")]
    pub method_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_date: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_due_date: Option<u32>,
}

impl NewPaymentMethod {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Payment method name cannot be empty".to_string(),
            )));
        }
        if self.method_type.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Payment method type cannot be empty".to_string(),
            )));
        }
        validate_day_of_month(self.statement_date, "Statement date")?;
        validate_day_of_month(self.payment_due_date, "Payment due date")?;
        Ok(())
    }
}

/// Input model for updating a payment method.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodUpdate {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub method_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_date: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_due_date: Option<u32>,
}

impl PaymentMethodUpdate {
    pub fn validate(&self) -> Result<()> {
        if !self.id.is_confirmed() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Payment method ID is required for updates".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Payment method name cannot be empty".to_string(),
            )));
        }
        validate_day_of_month(self.statement_date, "Statement date")?;
        validate_day_of_month(self.payment_due_date, "Payment due date")?;
        Ok(())
    }
}

fn validate_day_of_month(day: Option<u32>, field: &str) -> Result<()> {
    if let Some(day) = day {
        if !(1..=31).contains(&day) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "{} must be a day of month between 1 and 31",
                field
            ))));
        }
    }
    Ok(())
}
