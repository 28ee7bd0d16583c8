//! Generic cache with a freshness window around one async producer.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use futures::future::BoxFuture;
use log::{debug, warn};
use tokio::sync::RwLock;

use crate::errors::Result;

type Producer<T> = Box<dyn Fn() -> BoxFuture<'static, Result<T>> + Send + Sync>;

struct CacheState<T> {
    payload: Option<T>,
    fetched_at: Option<Instant>,
    last_error: Option<String>,
}

/// Cache-with-freshness-window over a zero-argument async producer.
///
/// `fetch` reuses the cached payload while it is fresh, refetches when it is
/// stale or a refresh is forced, and never lets two producer calls overlap.
/// A failing producer leaves the previous payload and timestamp untouched;
/// callers observe the failure through [`TimedCache::last_error`], never as a
/// returned error.
pub struct TimedCache<T> {
    name: &'static str,
    ttl: Duration,
    producer: Producer<T>,
    state: RwLock<CacheState<T>>,
    in_flight: AtomicBool,
}

impl<T: Clone + Send + Sync + 'static> TimedCache<T> {
    /// Creates a cache around `producer` with a freshness window in minutes.
    ///
    /// A window of 0 means every `fetch` refetches unless one is in flight.
    pub fn new<F, Fut>(name: &'static str, ttl_minutes: u64, producer: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        Self {
            name,
            ttl: Duration::from_secs(ttl_minutes * 60),
            producer: Box::new(move || Box::pin(producer())),
            state: RwLock::new(CacheState {
                payload: None,
                fetched_at: None,
                last_error: None,
            }),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Refreshes the cache if needed.
    ///
    /// Returns immediately when a fetch is already in flight (the racing
    /// caller does not start a second producer call), or when the payload is
    /// present and still fresh and `force_refresh` is false.
    pub async fn fetch(&self, force_refresh: bool) {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            debug!("[Cache] {}: fetch already in flight, skipping", self.name);
            return;
        }

        if !force_refresh && !self.needs_refresh().await {
            debug!("[Cache] {}: cache hit", self.name);
            self.in_flight.store(false, Ordering::Release);
            return;
        }

        self.state.write().await.last_error = None;

        let result = (self.producer)().await;
        {
            let mut state = self.state.write().await;
            match result {
                Ok(payload) => {
                    state.payload = Some(payload);
                    state.fetched_at = Some(Instant::now());
                    debug!("[Cache] {}: refreshed", self.name);
                }
                Err(err) => {
                    // Keep last-known-good data; the error is observable state.
                    warn!("[Cache] {}: fetch failed: {}", self.name, err);
                    state.last_error = Some(err.to_string());
                }
            }
        }
        self.in_flight.store(false, Ordering::Release);
    }

    /// Clone of the cached payload, `None` before the first successful fetch.
    pub async fn get(&self) -> Option<T> {
        self.state.read().await.payload.clone()
    }

    /// Replaces the payload without touching the freshness timestamp.
    ///
    /// This is the splice path for server-confirmed or reverted data; it must
    /// not count as a fetch, so staleness arithmetic is unaffected.
    pub async fn set(&self, payload: T) {
        self.state.write().await.payload = Some(payload);
    }

    /// Applies `f` to the payload slot under the write lock.
    pub async fn modify<F>(&self, f: F)
    where
        F: FnOnce(&mut Option<T>),
    {
        let mut state = self.state.write().await;
        f(&mut state.payload);
    }

    /// Current payload slot, for snapshotting before an optimistic write.
    pub async fn snapshot(&self) -> Option<T> {
        self.state.read().await.payload.clone()
    }

    /// Restores a snapshot verbatim, including the never-fetched `None` state.
    pub async fn restore(&self, snapshot: Option<T>) {
        self.state.write().await.payload = snapshot;
    }

    /// Error recorded by the most recent failed fetch, cleared when the next
    /// fetch attempt starts.
    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.last_error.clone()
    }

    /// True while a producer call is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// True when no successful fetch has happened within the window.
    pub async fn is_stale(&self) -> bool {
        match self.state.read().await.fetched_at {
            Some(at) => at.elapsed() >= self.ttl,
            None => true,
        }
    }

    async fn needs_refresh(&self) -> bool {
        let state = self.state.read().await;
        let fresh = match state.fetched_at {
            Some(at) => at.elapsed() < self.ttl,
            None => false,
        };
        !(fresh && state.payload.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;
    use tokio::sync::Notify;

    fn counting_producer(
        calls: Arc<AtomicUsize>,
    ) -> impl Fn() -> BoxFuture<'static, Result<Vec<i64>>> + Send + Sync {
        move || {
            let calls = calls.clone();
            Box::pin(async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(vec![1, 2, 3])
            })
        }
    }

    #[tokio::test]
    async fn test_fetch_within_window_calls_producer_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = TimedCache::new("test", 10, counting_producer(calls.clone()));

        cache.fetch(false).await;
        cache.fetch(false).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.get().await, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_force_refresh_always_calls_producer() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = TimedCache::new("test", 10, counting_producer(calls.clone()));

        cache.fetch(false).await;
        cache.fetch(true).await;
        cache.fetch(true).await;

        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_zero_window_always_refetches() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = TimedCache::new("test", 0, counting_producer(calls.clone()));

        cache.fetch(false).await;
        cache.fetch(false).await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_payload() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = TimedCache::new("test", 10, {
            let calls = calls.clone();
            move || {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n == 1 {
                        Err(Error::Unexpected("backend down".to_string()))
                    } else {
                        Ok(vec![42 + n as i64])
                    }
                }
            }
        });

        cache.fetch(false).await;
        assert_eq!(cache.get().await, Some(vec![42]));
        assert!(cache.last_error().await.is_none());

        cache.fetch(true).await;
        assert_eq!(cache.get().await, Some(vec![42]));
        let err = cache.last_error().await.expect("error should be recorded");
        assert!(err.contains("backend down"));

        // A later successful fetch replaces the payload and clears the error.
        cache.fetch(true).await;
        assert_eq!(cache.get().await, Some(vec![44]));
        assert!(cache.last_error().await.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_fetches_collapse_to_one_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let started = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());

        let cache = Arc::new(TimedCache::new("test", 0, {
            let calls = calls.clone();
            let started = started.clone();
            let release = release.clone();
            move || {
                let calls = calls.clone();
                let started = started.clone();
                let release = release.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    started.notify_one();
                    release.notified().await;
                    Ok(vec![7])
                }
            }
        }));

        let background = {
            let cache = cache.clone();
            tokio::spawn(async move { cache.fetch(true).await })
        };
        started.notified().await;

        // While the first call is blocked inside the producer, a second
        // forced fetch must return without invoking it again.
        cache.fetch(true).await;

        release.notify_one();
        background.await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.get().await, Some(vec![7]));
    }

    #[tokio::test]
    async fn test_set_does_not_refresh_staleness() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = TimedCache::new("test", 10, counting_producer(calls.clone()));

        assert!(cache.is_stale().await);
        cache.set(vec![9]).await;
        assert_eq!(cache.get().await, Some(vec![9]));

        // A direct set is not a fetch; the cache is still stale and the next
        // fetch goes to the producer.
        assert!(cache.is_stale().await);
        cache.fetch(false).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
