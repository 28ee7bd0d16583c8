//! Time-based caching for remote collections.
//!
//! Provides the freshness-window cache every collection-fetching service sits
//! on, plus the id-addressed collection store the optimistic engine splices
//! through.

mod store;
mod timed_cache;

pub use store::CollectionStore;
pub use timed_cache::TimedCache;
