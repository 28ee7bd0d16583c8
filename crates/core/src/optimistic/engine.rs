//! Generic optimistic-mutation engine.
//!
//! Every mutating flow has the same shape: snapshot the cached collections it
//! will touch, publish a tentative state, fire the remote call, then either
//! reconcile with the server-confirmed rows or restore every snapshot
//! verbatim. This module owns the snapshot/rollback half; call sites keep the
//! tentative-state builder and the reconciler, which are entity-specific.

use std::future::Future;

use async_trait::async_trait;
use log::warn;

use crate::cache::CollectionStore;
use crate::errors::Result;
use crate::ids::Identified;

#[async_trait]
trait Restorer: Send {
    async fn restore(&mut self);
}

struct StoreSnapshot<'a, T> {
    store: &'a CollectionStore<T>,
    saved: Option<Option<Vec<T>>>,
}

#[async_trait]
impl<T> Restorer for StoreSnapshot<'_, T>
where
    T: Identified + Clone + Send + Sync + 'static,
{
    async fn restore(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.store.restore(saved).await;
        }
    }
}

/// One optimistic mutation in flight.
///
/// Take snapshots of every store the mutation touches *before* publishing any
/// tentative state, then publish, then hand the remote call to
/// [`OptimisticMutation::commit`]. On success the snapshots are discarded and
/// the call site reconciles with the server rows; on failure every snapshot
/// is restored in reverse order and the error comes back for the caller to
/// surface.
///
/// ```ignore
/// let mut mutation = OptimisticMutation::new("expense-create");
/// mutation.snapshot(&self.expenses).await;
/// self.expenses.prepend(tentative.clone()).await;
/// let created = mutation.commit(self.api.create_expense(payload)).await?;
/// self.expenses.replace(tentative.id, created.clone()).await;
/// ```
pub struct OptimisticMutation<'a> {
    label: &'static str,
    snapshots: Vec<Box<dyn Restorer + 'a>>,
}

impl<'a> OptimisticMutation<'a> {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            snapshots: Vec::new(),
        }
    }

    /// Records the current contents of `store` for rollback.
    ///
    /// Must happen before any tentative write to that store; a snapshot taken
    /// afterwards would roll "back" to the tentative state.
    pub async fn snapshot<T>(&mut self, store: &'a CollectionStore<T>)
    where
        T: Identified + Clone + Send + Sync + 'static,
    {
        let saved = store.snapshot().await;
        self.snapshots.push(Box::new(StoreSnapshot {
            store,
            saved: Some(saved),
        }));
    }

    /// Awaits the remote call and settles the mutation.
    ///
    /// `Ok` drops the snapshots and returns the server's answer for the call
    /// site to reconcile. `Err` restores every snapshot, most recent first,
    /// so no tentative row survives a failed mutation.
    pub async fn commit<R, Fut>(mut self, remote: Fut) -> Result<R>
    where
        Fut: Future<Output = Result<R>> + Send,
    {
        match remote.await {
            Ok(confirmed) => Ok(confirmed),
            Err(err) => {
                warn!("[Optimistic] {}: remote call failed, rolling back: {err}", self.label);
                for snapshot in self.snapshots.iter_mut().rev() {
                    snapshot.restore().await;
                }
                Err(err)
            }
        }
    }
}
