//! Id-addressed collection store over a [`TimedCache`].

use std::future::Future;

use crate::cache::TimedCache;
use crate::errors::Result;
use crate::ids::{EntityId, Identified};

/// Cached collection of entities, one instance per entity type.
///
/// Every reader and writer of a collection goes through the same store, so
/// there is a single source of truth per collection. The splice methods back
/// the optimistic engine: tentative rows are prepended, then replaced by the
/// server-confirmed entity or rolled back via a snapshot restore.
pub struct CollectionStore<T> {
    cache: TimedCache<Vec<T>>,
}

impl<T> CollectionStore<T>
where
    T: Identified + Clone + Send + Sync + 'static,
{
    pub fn new<F, Fut>(name: &'static str, ttl_minutes: u64, producer: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<T>>> + Send + 'static,
    {
        Self {
            cache: TimedCache::new(name, ttl_minutes, producer),
        }
    }

    /// Refreshes the collection if stale or forced; see [`TimedCache::fetch`].
    pub async fn fetch(&self, force_refresh: bool) {
        self.cache.fetch(force_refresh).await;
    }

    /// Current items, empty before the first successful fetch.
    pub async fn items(&self) -> Vec<T> {
        self.cache.get().await.unwrap_or_default()
    }

    /// Looks up one item by id.
    pub async fn find(&self, id: EntityId) -> Option<T> {
        self.cache
            .get()
            .await
            .and_then(|items| items.into_iter().find(|item| item.entity_id() == id))
    }

    /// Replaces the whole collection without touching freshness.
    pub async fn set_items(&self, items: Vec<T>) {
        self.cache.set(items).await;
    }

    /// Inserts a tentative row at the top, where the UI shows new entries.
    pub async fn prepend(&self, item: T) {
        self.cache
            .modify(|payload| {
                payload.get_or_insert_with(Vec::new).insert(0, item);
            })
            .await;
    }

    /// Replaces the item with the given id in place. Returns false when no
    /// item matched (the row may have been rolled back already).
    pub async fn replace(&self, id: EntityId, item: T) -> bool {
        let mut replaced = false;
        self.cache
            .modify(|payload| {
                if let Some(items) = payload.as_mut() {
                    if let Some(slot) = items.iter_mut().find(|it| it.entity_id() == id) {
                        *slot = item;
                        replaced = true;
                    }
                }
            })
            .await;
        replaced
    }

    /// Removes the item with the given id. Returns false when no item matched.
    pub async fn remove(&self, id: EntityId) -> bool {
        let mut removed = false;
        self.cache
            .modify(|payload| {
                if let Some(items) = payload.as_mut() {
                    let before = items.len();
                    items.retain(|it| it.entity_id() != id);
                    removed = items.len() != before;
                }
            })
            .await;
        removed
    }

    /// Payload slot as-is, for snapshotting before an optimistic write.
    pub async fn snapshot(&self) -> Option<Vec<T>> {
        self.cache.snapshot().await
    }

    /// Restores a snapshot verbatim, including the never-fetched state.
    pub async fn restore(&self, snapshot: Option<Vec<T>>) {
        self.cache.restore(snapshot).await;
    }

    /// Error recorded by the most recent failed fetch.
    pub async fn last_error(&self) -> Option<String> {
        self.cache.last_error().await
    }

    /// True while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.cache.is_loading()
    }

    /// True when no successful fetch has happened within the window.
    pub async fn is_stale(&self) -> bool {
        self.cache.is_stale().await
    }
}
