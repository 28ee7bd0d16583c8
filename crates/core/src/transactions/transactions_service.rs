use std::sync::Arc;

use chrono::Utc;
use log::debug;

use super::transactions_model::{
    IncomeResult, NewIncome, NewTransfer, TransactionType, TransferResult, WalletTransaction,
};
use super::transactions_traits::{TransactionServiceTrait, TransactionsApi};
use crate::cache::CollectionStore;
use crate::constants::DEFAULT_CACHE_TTL_MINUTES;
use crate::errors::{Error, Result};
use crate::events::{EventSink, StoreEvent};
use crate::ids::{EntityId, PlaceholderIds};
use crate::optimistic::OptimisticMutation;
use crate::wallets::{Wallet, WalletService};

/// Service for wallet transactions and the two compound financial operations.
///
/// Balance adjustments go through the wallet service's store, never a private
/// copy, so readers of either collection always see the same instance. The
/// two stores are still updated as two separate writes; there is no
/// cross-collection transaction.
pub struct TransactionService {
    api: Arc<dyn TransactionsApi>,
    event_sink: Arc<dyn EventSink>,
    placeholder_ids: Arc<PlaceholderIds>,
    wallets: Arc<WalletService>,
    transactions: CollectionStore<WalletTransaction>,
}

impl TransactionService {
    /// Creates a new TransactionService instance
    pub fn new(
        api: Arc<dyn TransactionsApi>,
        event_sink: Arc<dyn EventSink>,
        placeholder_ids: Arc<PlaceholderIds>,
        wallets: Arc<WalletService>,
    ) -> Self {
        let transactions = {
            let api = api.clone();
            CollectionStore::new("transactions", DEFAULT_CACHE_TTL_MINUTES, move || {
                let api = api.clone();
                async move { api.list_transactions().await }
            })
        };

        Self {
            api,
            event_sink,
            placeholder_ids,
            wallets,
            transactions,
        }
    }

    async fn require_wallet(&self, wallet_id: EntityId) -> Result<Wallet> {
        self.wallets
            .store()
            .find(wallet_id)
            .await
            .ok_or_else(|| Error::NotFound(format!("Wallet {wallet_id}")))
    }

    fn tentative_transaction(
        &self,
        description: &str,
        amount_cents: i64,
        transaction_type: TransactionType,
        date: chrono::NaiveDate,
        wallet_id: EntityId,
        transfer_wallet_id: Option<EntityId>,
        balance_after_cents: i64,
    ) -> WalletTransaction {
        let now = Utc::now();
        WalletTransaction {
            id: self.placeholder_ids.next(),
            description: description.to_string(),
            amount_cents,
            transaction_type,
            date,
            wallet_id,
            wallet: None,
            transfer_wallet_id,
            balance_after_cents,
            is_deleted: false,
            user_id: EntityId::default(),
            created_at: now,
            updated_at: now,
        }
    }

    async fn adjust_balance(&self, wallet: &Wallet, delta_cents: i64) {
        let mut adjusted = wallet.clone();
        adjusted.balance_cents += delta_cents;
        self.wallets.store().replace(wallet.id, adjusted).await;
    }
}

#[async_trait::async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn refresh(&self, force_refresh: bool) {
        self.transactions.fetch(force_refresh).await;
    }

    async fn transactions(&self) -> Vec<WalletTransaction> {
        self.transactions.items().await
    }

    async fn record_income(&self, income: NewIncome) -> Result<IncomeResult> {
        income.validate()?;
        let wallet = self.require_wallet(income.wallet_id).await?;

        let tentative = self.tentative_transaction(
            &income.description,
            income.amount_cents,
            TransactionType::Income,
            income.date,
            wallet.id,
            None,
            wallet.balance_cents + income.amount_cents,
        );
        debug!("[Transactions] recording income, placeholder {}", tentative.id);

        let mut mutation = OptimisticMutation::new("income");
        mutation.snapshot(&self.transactions).await;
        mutation.snapshot(self.wallets.store()).await;

        self.transactions.prepend(tentative.clone()).await;
        self.adjust_balance(&wallet, income.amount_cents).await;

        let confirmed = mutation.commit(self.api.record_income(income)).await?;

        self.transactions
            .replace(tentative.id, confirmed.transaction.clone())
            .await;
        self.wallets
            .store()
            .replace(confirmed.wallet.id, confirmed.wallet.clone())
            .await;

        self.event_sink.emit_batch(vec![
            StoreEvent::transactions_changed(vec![confirmed.transaction.id]),
            StoreEvent::wallets_changed(vec![confirmed.wallet.id]),
            StoreEvent::SummaryStale,
        ]);
        Ok(confirmed)
    }

    async fn transfer(&self, transfer: NewTransfer) -> Result<TransferResult> {
        // Same-wallet transfers are rejected here, before any store write.
        transfer.validate()?;
        let from = self.require_wallet(transfer.from_wallet_id).await?;
        let to = self.require_wallet(transfer.to_wallet_id).await?;

        let outgoing = self.tentative_transaction(
            &transfer.description,
            transfer.amount_cents,
            TransactionType::TransferOut,
            transfer.date,
            from.id,
            Some(to.id),
            from.balance_cents - transfer.amount_cents,
        );
        let incoming = self.tentative_transaction(
            &transfer.description,
            transfer.amount_cents,
            TransactionType::TransferIn,
            transfer.date,
            to.id,
            Some(from.id),
            to.balance_cents + transfer.amount_cents,
        );
        debug!(
            "[Transactions] transferring, placeholders {} / {}",
            outgoing.id, incoming.id
        );

        let mut mutation = OptimisticMutation::new("transfer");
        mutation.snapshot(&self.transactions).await;
        mutation.snapshot(self.wallets.store()).await;

        self.transactions.prepend(outgoing.clone()).await;
        self.transactions.prepend(incoming.clone()).await;
        self.adjust_balance(&from, -transfer.amount_cents).await;
        self.adjust_balance(&to, transfer.amount_cents).await;

        let confirmed = mutation.commit(self.api.transfer(transfer)).await?;

        self.transactions
            .replace(outgoing.id, confirmed.outgoing.clone())
            .await;
        self.transactions
            .replace(incoming.id, confirmed.incoming.clone())
            .await;
        self.wallets
            .store()
            .replace(confirmed.from_wallet.id, confirmed.from_wallet.clone())
            .await;
        self.wallets
            .store()
            .replace(confirmed.to_wallet.id, confirmed.to_wallet.clone())
            .await;

        self.event_sink.emit_batch(vec![
            StoreEvent::transactions_changed(vec![
                confirmed.outgoing.id,
                confirmed.incoming.id,
            ]),
            StoreEvent::wallets_changed(vec![
                confirmed.from_wallet.id,
                confirmed.to_wallet.id,
            ]),
            StoreEvent::SummaryStale,
        ]);
        Ok(confirmed)
    }
}
