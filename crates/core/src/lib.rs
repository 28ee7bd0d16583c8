//! Mad Wallet Core - Domain entities, cached stores, and services.
//!
//! This crate contains the client-side business logic for Mad Wallet.
//! It is transport-agnostic and defines backend traits that are implemented
//! by the `api-client` crate.

pub mod cache;
pub mod catalog;
pub mod constants;
pub mod context;
pub mod dashboard;
pub mod errors;
pub mod events;
pub mod expenses;
pub mod ids;
pub mod insights;
pub mod money;
pub mod optimistic;
pub mod purchases;
pub mod recurring_bills;
pub mod transactions;
pub mod wallets;

// Re-export common types
pub use ids::{EntityId, Identified, PlaceholderIds};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
