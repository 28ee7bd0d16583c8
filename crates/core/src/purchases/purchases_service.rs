use std::sync::Arc;

use super::purchases_model::{NewPurchase, Purchase, PurchaseUpdate};
use super::purchases_traits::{PurchaseServiceTrait, PurchasesApi};
use crate::cache::CollectionStore;
use crate::constants::DEFAULT_CACHE_TTL_MINUTES;
use crate::errors::Result;
use crate::events::{EventSink, StoreEvent};
use crate::ids::EntityId;

/// Service for the cached purchase collection.
pub struct PurchaseService {
    api: Arc<dyn PurchasesApi>,
    event_sink: Arc<dyn EventSink>,
    purchases: CollectionStore<Purchase>,
}

impl PurchaseService {
    /// Creates a new PurchaseService instance
    pub fn new(api: Arc<dyn PurchasesApi>, event_sink: Arc<dyn EventSink>) -> Self {
        let purchases = {
            let api = api.clone();
            CollectionStore::new("purchases", DEFAULT_CACHE_TTL_MINUTES, move || {
                let api = api.clone();
                async move { api.list_purchases().await }
            })
        };

        Self {
            api,
            event_sink,
            purchases,
        }
    }
}

#[async_trait::async_trait]
impl PurchaseServiceTrait for PurchaseService {
    async fn refresh(&self, force_refresh: bool) {
        self.purchases.fetch(force_refresh).await;
    }

    async fn purchases(&self) -> Vec<Purchase> {
        self.purchases.items().await
    }

    async fn get_purchase(&self, purchase_id: EntityId) -> Option<Purchase> {
        self.purchases.find(purchase_id).await
    }

    async fn create_purchase(&self, new_purchase: NewPurchase) -> Result<Purchase> {
        new_purchase.validate()?;
        let created = self.api.create_purchase(new_purchase).await?;
        self.purchases.fetch(true).await;
        self.event_sink.emit_batch(vec![
            StoreEvent::PurchasesChanged {
                purchase_ids: vec![created.id],
            },
            // The generated installments land in the expense collection too.
            StoreEvent::expenses_changed(vec![]),
            StoreEvent::SummaryStale,
        ]);
        Ok(created)
    }

    async fn update_purchase(&self, update: PurchaseUpdate) -> Result<Purchase> {
        update.validate()?;
        let updated = self.api.update_purchase(update).await?;
        self.purchases.fetch(true).await;
        self.event_sink.emit(StoreEvent::PurchasesChanged {
            purchase_ids: vec![updated.id],
        });
        Ok(updated)
    }

    async fn delete_purchase(&self, purchase_id: EntityId) -> Result<()> {
        self.api.delete_purchase(purchase_id).await?;
        self.purchases.fetch(true).await;
        self.event_sink.emit_batch(vec![
            StoreEvent::PurchasesChanged {
                purchase_ids: vec![purchase_id],
            },
            StoreEvent::expenses_changed(vec![]),
            StoreEvent::SummaryStale,
        ]);
        Ok(())
    }
}
