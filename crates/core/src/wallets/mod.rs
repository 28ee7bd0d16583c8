//! Wallets module - balances and the optimistic wallet mutations.

mod wallets_model;
mod wallets_service;
mod wallets_traits;

#[cfg(test)]
mod wallets_service_tests;

// Re-export the public interface
pub use wallets_model::{NewWallet, Wallet, WalletUpdate};
pub use wallets_service::WalletService;
pub use wallets_traits::{WalletServiceTrait, WalletsApi};
