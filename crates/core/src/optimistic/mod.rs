//! Optimistic mutation support.
//!
//! One engine for the snapshot/publish/reconcile/rollback flow shared by
//! expense, wallet, and transaction mutations.

mod engine;

pub use engine::OptimisticMutation;
