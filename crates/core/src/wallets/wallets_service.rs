use std::sync::Arc;

use chrono::Utc;
use log::debug;

use super::wallets_model::{NewWallet, Wallet, WalletUpdate};
use super::wallets_traits::{WalletServiceTrait, WalletsApi};
use crate::cache::CollectionStore;
use crate::constants::DEFAULT_CACHE_TTL_MINUTES;
use crate::errors::Result;
use crate::events::{EventSink, StoreEvent};
use crate::ids::{EntityId, PlaceholderIds};
use crate::optimistic::OptimisticMutation;

/// Service for the cached wallet collection.
pub struct WalletService {
    api: Arc<dyn WalletsApi>,
    event_sink: Arc<dyn EventSink>,
    placeholder_ids: Arc<PlaceholderIds>,
    wallets: CollectionStore<Wallet>,
}

impl WalletService {
    /// Creates a new WalletService instance
    pub fn new(
        api: Arc<dyn WalletsApi>,
        event_sink: Arc<dyn EventSink>,
        placeholder_ids: Arc<PlaceholderIds>,
    ) -> Self {
        let wallets = {
            let api = api.clone();
            CollectionStore::new("wallets", DEFAULT_CACHE_TTL_MINUTES, move || {
                let api = api.clone();
                async move { api.list_wallets().await }
            })
        };

        Self {
            api,
            event_sink,
            placeholder_ids,
            wallets,
        }
    }

    /// The underlying store, shared with the transaction and expense flows
    /// that adjust balances: every writer goes through this one instance.
    pub(crate) fn store(&self) -> &CollectionStore<Wallet> {
        &self.wallets
    }

    fn tentative_wallet(&self, new_wallet: &NewWallet) -> Wallet {
        let now = Utc::now();
        Wallet {
            id: self.placeholder_ids.next(),
            name: new_wallet.name.clone(),
            description: new_wallet.description.clone(),
            wallet_type: new_wallet.wallet_type.clone(),
            balance_cents: new_wallet.balance_cents,
            currency: new_wallet.currency.clone(),
            is_active: true,
            is_deleted: false,
            user_id: EntityId::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait::async_trait]
impl WalletServiceTrait for WalletService {
    async fn refresh(&self, force_refresh: bool) {
        self.wallets.fetch(force_refresh).await;
    }

    async fn wallets(&self) -> Vec<Wallet> {
        self.wallets.items().await
    }

    async fn active_wallets(&self) -> Vec<Wallet> {
        self.wallets
            .items()
            .await
            .into_iter()
            .filter(Wallet::is_usable)
            .collect()
    }

    async fn get_wallet(&self, wallet_id: EntityId) -> Option<Wallet> {
        self.wallets.find(wallet_id).await
    }

    async fn create_wallet(&self, new_wallet: NewWallet) -> Result<Wallet> {
        new_wallet.validate()?;

        let tentative = self.tentative_wallet(&new_wallet);
        debug!("[Wallets] creating wallet, placeholder {}", tentative.id);

        let mut mutation = OptimisticMutation::new("wallet-create");
        mutation.snapshot(&self.wallets).await;
        self.wallets.prepend(tentative.clone()).await;

        let created = mutation.commit(self.api.create_wallet(new_wallet)).await?;
        self.wallets.replace(tentative.id, created.clone()).await;
        self.event_sink.emit(StoreEvent::wallets_changed(vec![created.id]));
        Ok(created)
    }

    async fn update_wallet(&self, update: WalletUpdate) -> Result<Wallet> {
        update.validate()?;

        let mut mutation = OptimisticMutation::new("wallet-update");
        mutation.snapshot(&self.wallets).await;
        if let Some(mut wallet) = self.wallets.find(update.id).await {
            update.apply_to(&mut wallet);
            self.wallets.replace(update.id, wallet).await;
        }

        let updated = mutation.commit(self.api.update_wallet(update)).await?;
        self.wallets.replace(updated.id, updated.clone()).await;
        self.event_sink.emit(StoreEvent::wallets_changed(vec![updated.id]));
        Ok(updated)
    }
}
