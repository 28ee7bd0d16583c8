//! Store change events.
//!
//! Provides event types and the sink trait for signaling store changes
//! after successful mutations. The embedding UI consumes a sink to refresh
//! views without polling the stores.

mod sink;
mod store_event;

pub use sink::*;
pub use store_event::*;
