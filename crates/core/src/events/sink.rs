//! Store event sink trait and implementations.

use std::sync::{Arc, Mutex};

use log::error;
use tokio::sync::mpsc;

use super::StoreEvent;

/// Trait for receiving store events.
///
/// Core services emit events through this trait after successful mutations.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no network calls, no awaits)
/// - Implementations should queue events for async processing
/// - Failure to emit must not affect the mutation (best-effort)
pub trait EventSink: Send + Sync {
    /// Emit a single store event.
    fn emit(&self, event: StoreEvent);

    /// Emit multiple store events.
    ///
    /// Default implementation calls `emit()` for each event.
    fn emit_batch(&self, events: Vec<StoreEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// No-op implementation for tests or contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpEventSink;

impl EventSink for NoOpEventSink {
    fn emit(&self, _event: StoreEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Channel-backed sink for embedders that process events asynchronously.
///
/// Events are sent to an unbounded mpsc channel; the embedding UI drains the
/// receiver on its own schedule, keeping `emit()` non-blocking.
pub struct ChannelEventSink {
    sender: mpsc::UnboundedSender<StoreEvent>,
}

impl ChannelEventSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<StoreEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: StoreEvent) {
        if let Err(e) = self.sender.send(event) {
            error!("Failed to send store event to channel: {}", e);
        }
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockEventSink {
    events: Arc<Mutex<Vec<StoreEvent>>>,
}

impl MockEventSink {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<StoreEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl EventSink for MockEventSink {
    fn emit(&self, event: StoreEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::EntityId;

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoOpEventSink;
        sink.emit(StoreEvent::SummaryStale);
        sink.emit_batch(vec![
            StoreEvent::expenses_changed(vec![EntityId::Confirmed(1)]),
            StoreEvent::SessionExpired,
        ]);
    }

    #[test]
    fn test_channel_sink_delivers_events() {
        let (sink, mut receiver) = ChannelEventSink::new();

        sink.emit(StoreEvent::wallets_changed(vec![EntityId::Confirmed(2)]));

        match receiver.try_recv() {
            Ok(StoreEvent::WalletsChanged { wallet_ids }) => {
                assert_eq!(wallet_ids, vec![EntityId::Confirmed(2)]);
            }
            other => panic!("Expected WalletsChanged, got {:?}", other),
        }
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_mock_sink_collects_events() {
        let sink = MockEventSink::new();
        assert!(sink.is_empty());

        sink.emit(StoreEvent::SummaryStale);
        assert_eq!(sink.len(), 1);

        sink.emit_batch(vec![
            StoreEvent::transactions_changed(vec![EntityId::Pending(-1)]),
            StoreEvent::SessionExpired,
        ]);
        assert_eq!(sink.len(), 3);

        sink.clear();
        assert!(sink.is_empty());
    }
}
