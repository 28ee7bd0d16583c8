use std::sync::Arc;

use super::recurring_bills_model::{NewRecurringBill, RecurringBill, RecurringBillUpdate};
use super::recurring_bills_traits::{RecurringBillServiceTrait, RecurringBillsApi};
use crate::cache::CollectionStore;
use crate::constants::DEFAULT_CACHE_TTL_MINUTES;
use crate::errors::Result;
use crate::events::{EventSink, StoreEvent};
use crate::ids::EntityId;

/// Service for the cached recurring-bill collection.
pub struct RecurringBillService {
    api: Arc<dyn RecurringBillsApi>,
    event_sink: Arc<dyn EventSink>,
    bills: CollectionStore<RecurringBill>,
}

impl RecurringBillService {
    /// Creates a new RecurringBillService instance
    pub fn new(api: Arc<dyn RecurringBillsApi>, event_sink: Arc<dyn EventSink>) -> Self {
        let bills = {
            let api = api.clone();
            CollectionStore::new("recurring_bills", DEFAULT_CACHE_TTL_MINUTES, move || {
                let api = api.clone();
                async move { api.list_recurring_bills().await }
            })
        };

        Self {
            api,
            event_sink,
            bills,
        }
    }
}

#[async_trait::async_trait]
impl RecurringBillServiceTrait for RecurringBillService {
    async fn refresh(&self, force_refresh: bool) {
        self.bills.fetch(force_refresh).await;
    }

    async fn recurring_bills(&self) -> Vec<RecurringBill> {
        self.bills.items().await
    }

    async fn get_recurring_bill(&self, bill_id: EntityId) -> Option<RecurringBill> {
        self.bills.find(bill_id).await
    }

    async fn create_recurring_bill(&self, new_bill: NewRecurringBill) -> Result<RecurringBill> {
        new_bill.validate()?;
        let created = self.api.create_recurring_bill(new_bill).await?;
        self.bills.fetch(true).await;
        self.event_sink.emit(StoreEvent::RecurringBillsChanged {
            recurring_bill_ids: vec![created.id],
        });
        Ok(created)
    }

    async fn update_recurring_bill(&self, update: RecurringBillUpdate) -> Result<RecurringBill> {
        update.validate()?;
        let updated = self.api.update_recurring_bill(update).await?;
        self.bills.fetch(true).await;
        self.event_sink.emit(StoreEvent::RecurringBillsChanged {
            recurring_bill_ids: vec![updated.id],
        });
        Ok(updated)
    }

    async fn delete_recurring_bill(&self, bill_id: EntityId) -> Result<()> {
        self.api.delete_recurring_bill(bill_id).await?;
        self.bills.fetch(true).await;
        self.event_sink.emit(StoreEvent::RecurringBillsChanged {
            recurring_bill_ids: vec![bill_id],
        });
        Ok(())
    }
}
