//! Wallet backend and service traits.

use async_trait::async_trait;

use super::wallets_model::{NewWallet, Wallet, WalletUpdate};
use crate::errors::Result;
use crate::ids::EntityId;

/// Remote contract for wallets. Implemented by the api-client crate and by
/// test mocks; no HTTP types leak through.
#[async_trait]
pub trait WalletsApi: Send + Sync {
    async fn list_wallets(&self) -> Result<Vec<Wallet>>;
    async fn create_wallet(&self, new_wallet: NewWallet) -> Result<Wallet>;
    async fn update_wallet(&self, update: WalletUpdate) -> Result<Wallet>;
}

/// Service contract for the cached wallet collection.
#[async_trait]
pub trait WalletServiceTrait: Send + Sync {
    /// Refreshes the wallet list, reusing a fresh cache unless forced.
    async fn refresh(&self, force_refresh: bool);

    /// All wallets, including inactive and soft-deleted ones.
    async fn wallets(&self) -> Vec<Wallet>;

    /// Wallets that can receive income or pay expenses.
    async fn active_wallets(&self) -> Vec<Wallet>;

    async fn get_wallet(&self, wallet_id: EntityId) -> Option<Wallet>;

    /// Creates a wallet optimistically: a placeholder row appears at once and
    /// is replaced by the server row, or rolled back on failure.
    async fn create_wallet(&self, new_wallet: NewWallet) -> Result<Wallet>;

    /// Updates a wallet optimistically by splicing the edited fields in place.
    async fn update_wallet(&self, update: WalletUpdate) -> Result<Wallet>;
}
