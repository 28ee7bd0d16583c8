//! Purchase backend and service traits.

use async_trait::async_trait;

use super::purchases_model::{NewPurchase, Purchase, PurchaseUpdate};
use crate::errors::Result;
use crate::ids::EntityId;

/// Remote contract for purchases. Installment expense generation happens
/// server-side; the client only sees the resulting rows.
#[async_trait]
pub trait PurchasesApi: Send + Sync {
    async fn list_purchases(&self) -> Result<Vec<Purchase>>;
    async fn create_purchase(&self, new_purchase: NewPurchase) -> Result<Purchase>;
    async fn update_purchase(&self, update: PurchaseUpdate) -> Result<Purchase>;
    async fn delete_purchase(&self, purchase_id: EntityId) -> Result<()>;
}

/// Service contract for the cached purchase collection. Mutations are
/// passthrough with a forced refresh: a purchase mutation regenerates
/// installment expenses server-side, so the canonical rows must come back
/// from the server rather than be synthesized locally.
#[async_trait]
pub trait PurchaseServiceTrait: Send + Sync {
    async fn refresh(&self, force_refresh: bool);

    async fn purchases(&self) -> Vec<Purchase>;

    async fn get_purchase(&self, purchase_id: EntityId) -> Option<Purchase>;

    async fn create_purchase(&self, new_purchase: NewPurchase) -> Result<Purchase>;
    async fn update_purchase(&self, update: PurchaseUpdate) -> Result<Purchase>;
    async fn delete_purchase(&self, purchase_id: EntityId) -> Result<()>;
}
