//! Reference-data backend and service traits.
//!
//! The backend trait defines the remote contract without any HTTP types,
//! allowing the api-client crate (or a test mock) to implement it.

use async_trait::async_trait;

use super::catalog_model::{
    Category, CategoryUpdate, NewCategory, NewPaymentMethod, NewStatus, PaymentMethod,
    PaymentMethodUpdate, Status, StatusUpdate,
};
use crate::errors::Result;
use crate::ids::EntityId;

/// Remote contract for the three reference collections.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>>;
    async fn create_category(&self, new_category: NewCategory) -> Result<Category>;
    async fn update_category(&self, update: CategoryUpdate) -> Result<Category>;
    async fn delete_category(&self, category_id: EntityId) -> Result<()>;

    async fn list_statuses(&self) -> Result<Vec<Status>>;
    async fn create_status(&self, new_status: NewStatus) -> Result<Status>;
    async fn update_status(&self, update: StatusUpdate) -> Result<Status>;
    async fn delete_status(&self, status_id: EntityId) -> Result<()>;

    async fn list_payment_methods(&self) -> Result<Vec<PaymentMethod>>;
    async fn create_payment_method(&self, new_method: NewPaymentMethod) -> Result<PaymentMethod>;
    async fn update_payment_method(&self, update: PaymentMethodUpdate) -> Result<PaymentMethod>;
    async fn delete_payment_method(&self, payment_method_id: EntityId) -> Result<()>;
}

/// Service contract for cached reference data.
///
/// Reads come from the timed caches; mutations go to the backend and then
/// force-refresh the affected collection so every consumer sees the
/// server-canonical rows.
#[async_trait]
pub trait CatalogServiceTrait: Send + Sync {
    /// Refreshes all three collections, reusing fresh caches unless forced.
    async fn refresh(&self, force_refresh: bool);

    async fn categories(&self) -> Vec<Category>;
    async fn statuses(&self) -> Vec<Status>;
    async fn payment_methods(&self) -> Vec<PaymentMethod>;

    async fn get_category(&self, category_id: EntityId) -> Option<Category>;
    async fn get_status(&self, status_id: EntityId) -> Option<Status>;
    async fn get_payment_method(&self, payment_method_id: EntityId) -> Option<PaymentMethod>;

    /// The status whose display name marks expenses paid, if the backend
    /// defines one.
    async fn paid_status(&self) -> Option<Status>;

    async fn create_category(&self, new_category: NewCategory) -> Result<Category>;
    async fn update_category(&self, update: CategoryUpdate) -> Result<Category>;
    async fn delete_category(&self, category_id: EntityId) -> Result<()>;

    async fn create_status(&self, new_status: NewStatus) -> Result<Status>;
    async fn update_status(&self, update: StatusUpdate) -> Result<Status>;
    async fn delete_status(&self, status_id: EntityId) -> Result<()>;

    async fn create_payment_method(&self, new_method: NewPaymentMethod) -> Result<PaymentMethod>;
    async fn update_payment_method(&self, update: PaymentMethodUpdate) -> Result<PaymentMethod>;
    async fn delete_payment_method(&self, payment_method_id: EntityId) -> Result<()>;
}
