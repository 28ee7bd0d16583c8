//! Purchases module - installment plans that generate expenses.

mod purchases_model;
mod purchases_service;
mod purchases_traits;

// Re-export the public interface
pub use purchases_model::{NewPurchase, Purchase, PurchaseUpdate};
pub use purchases_service::PurchaseService;
pub use purchases_traits::{PurchasesApi, PurchaseServiceTrait};
