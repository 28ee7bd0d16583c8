//! Mad Wallet REST client.
//!
//! Binds the core's backend traits to the Mad Wallet API over HTTP: bearer
//! auth, the `{ data: T }` response envelope, and the 401 session-expiry
//! convention all live here so the core stays transport-agnostic.

mod auth;
mod backend;
mod client;
mod config;
mod error;

pub use auth::{AuthResponse, Credentials, Signup, User};
pub use client::ApiClient;
pub use config::{ApiClientConfig, DEFAULT_TIMEOUT_SECS};
pub use error::ApiError;
