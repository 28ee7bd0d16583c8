use std::sync::Arc;

use log::debug;

use super::catalog_model::{
    Category, CategoryUpdate, NewCategory, NewPaymentMethod, NewStatus, PaymentMethod,
    PaymentMethodUpdate, Status, StatusUpdate,
};
use super::catalog_traits::{CatalogApi, CatalogServiceTrait};
use crate::cache::CollectionStore;
use crate::constants::DEFAULT_CACHE_TTL_MINUTES;
use crate::errors::Result;
use crate::events::{EventSink, StoreEvent};
use crate::ids::EntityId;

/// Service for cached reference data (categories, statuses, payment methods)
pub struct CatalogService {
    api: Arc<dyn CatalogApi>,
    event_sink: Arc<dyn EventSink>,
    categories: CollectionStore<Category>,
    statuses: CollectionStore<Status>,
    payment_methods: CollectionStore<PaymentMethod>,
}

impl CatalogService {
    /// Creates a new CatalogService instance
    pub fn new(api: Arc<dyn CatalogApi>, event_sink: Arc<dyn EventSink>) -> Self {
        let categories = {
            let api = api.clone();
            CollectionStore::new("categories", DEFAULT_CACHE_TTL_MINUTES, move || {
                let api = api.clone();
                async move { api.list_categories().await }
            })
        };
        let statuses = {
            let api = api.clone();
            CollectionStore::new("statuses", DEFAULT_CACHE_TTL_MINUTES, move || {
                let api = api.clone();
                async move { api.list_statuses().await }
            })
        };
        let payment_methods = {
            let api = api.clone();
            CollectionStore::new("payment_methods", DEFAULT_CACHE_TTL_MINUTES, move || {
                let api = api.clone();
                async move { api.list_payment_methods().await }
            })
        };

        Self {
            api,
            event_sink,
            categories,
            statuses,
            payment_methods,
        }
    }
}

#[async_trait::async_trait]
impl CatalogServiceTrait for CatalogService {
    async fn refresh(&self, force_refresh: bool) {
        debug!("[Catalog] refreshing reference data, force: {force_refresh}");
        futures::join!(
            self.categories.fetch(force_refresh),
            self.statuses.fetch(force_refresh),
            self.payment_methods.fetch(force_refresh),
        );
    }

    async fn categories(&self) -> Vec<Category> {
        self.categories.items().await
    }

    async fn statuses(&self) -> Vec<Status> {
        self.statuses.items().await
    }

    async fn payment_methods(&self) -> Vec<PaymentMethod> {
        self.payment_methods.items().await
    }

    async fn get_category(&self, category_id: EntityId) -> Option<Category> {
        self.categories.find(category_id).await
    }

    async fn get_status(&self, status_id: EntityId) -> Option<Status> {
        self.statuses.find(status_id).await
    }

    async fn get_payment_method(&self, payment_method_id: EntityId) -> Option<PaymentMethod> {
        self.payment_methods.find(payment_method_id).await
    }

    async fn paid_status(&self) -> Option<Status> {
        self.statuses
            .items()
            .await
            .into_iter()
            .find(|status| status.is_paid_marker())
    }

    async fn create_category(&self, new_category: NewCategory) -> Result<Category> {
        new_category.validate()?;
        let created = self.api.create_category(new_category).await?;
        self.categories.fetch(true).await;
        self.event_sink.emit(StoreEvent::CategoriesChanged {
            category_ids: vec![created.id],
        });
        Ok(created)
    }

    async fn update_category(&self, update: CategoryUpdate) -> Result<Category> {
        update.validate()?;
        let updated = self.api.update_category(update).await?;
        self.categories.fetch(true).await;
        self.event_sink.emit(StoreEvent::CategoriesChanged {
            category_ids: vec![updated.id],
        });
        Ok(updated)
    }

    async fn delete_category(&self, category_id: EntityId) -> Result<()> {
        self.api.delete_category(category_id).await?;
        self.categories.fetch(true).await;
        self.event_sink.emit(StoreEvent::CategoriesChanged {
            category_ids: vec![category_id],
        });
        Ok(())
    }

    async fn create_status(&self, new_status: NewStatus) -> Result<Status> {
        new_status.validate()?;
        let created = self.api.create_status(new_status).await?;
        self.statuses.fetch(true).await;
        self.event_sink.emit(StoreEvent::StatusesChanged {
            status_ids: vec![created.id],
        });
        Ok(created)
    }

    async fn update_status(&self, update: StatusUpdate) -> Result<Status> {
        update.validate()?;
        let updated = self.api.update_status(update).await?;
        self.statuses.fetch(true).await;
        self.event_sink.emit(StoreEvent::StatusesChanged {
            status_ids: vec![updated.id],
        });
        Ok(updated)
    }

    async fn delete_status(&self, status_id: EntityId) -> Result<()> {
        self.api.delete_status(status_id).await?;
        self.statuses.fetch(true).await;
        self.event_sink.emit(StoreEvent::StatusesChanged {
            status_ids: vec![status_id],
        });
        Ok(())
    }

    async fn create_payment_method(&self, new_method: NewPaymentMethod) -> Result<PaymentMethod> {
        new_method.validate()?;
        let created = self.api.create_payment_method(new_method).await?;
        self.payment_methods.fetch(true).await;
        self.event_sink.emit(StoreEvent::PaymentMethodsChanged {
            payment_method_ids: vec![created.id],
        });
        Ok(created)
    }

    async fn update_payment_method(&self, update: PaymentMethodUpdate) -> Result<PaymentMethod> {
        update.validate()?;
        let updated = self.api.update_payment_method(update).await?;
        self.payment_methods.fetch(true).await;
        self.event_sink.emit(StoreEvent::PaymentMethodsChanged {
            payment_method_ids: vec![updated.id],
        });
        Ok(updated)
    }

    async fn delete_payment_method(&self, payment_method_id: EntityId) -> Result<()> {
        self.api.delete_payment_method(payment_method_id).await?;
        self.payment_methods.fetch(true).await;
        self.event_sink.emit(StoreEvent::PaymentMethodsChanged {
            payment_method_ids: vec![payment_method_id],
        });
        Ok(())
    }
}
