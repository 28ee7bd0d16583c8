//! Reference-data module - categories, statuses, and payment methods.
//!
//! These three collections change rarely and are read by almost every screen,
//! so they share one service holding a timed cache per collection.

mod catalog_model;
mod catalog_service;
mod catalog_traits;


// Re-export the public interface
pub use catalog_model::{
    Category, CategoryUpdate, NewCategory, NewPaymentMethod, NewStatus, PaymentMethod,
    PaymentMethodUpdate, Status, StatusUpdate,
};
pub use catalog_service::CatalogService;
pub use catalog_traits::{CatalogApi, CatalogServiceTrait};
