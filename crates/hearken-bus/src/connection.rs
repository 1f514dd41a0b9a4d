//! The connection trait every bus transport implements.

use crate::{BusError, BusMessage, QoS};
use tokio::sync::mpsc;

/// A handle onto a message bus.
///
/// The trait is object-safe on purpose: components hold an
/// `Arc<dyn BusConnection>` so the transport can be swapped without
/// touching them — the in-process [`LocalBus`](crate::LocalBus) in tests
/// and single-process deployments, a socket client against the platform
/// daemons in production.
///
/// Publishing is synchronous fire-and-forget: the call hands the message
/// to the transport and returns. Whether any subscriber actually received
/// it is not reported; callers observe effects through events instead.
pub trait BusConnection: Send + Sync {
    /// Publish a JSON document on `topic`.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport-level failures (encoding, bus
    /// shut down). Absence of subscribers is not an error.
    fn publish(&self, topic: &str, payload: &serde_json::Value, qos: QoS) -> Result<(), BusError>;

    /// Subscribe to `topic`, receiving every subsequent message published
    /// on it (plus the retained message, if one exists).
    ///
    /// The subscription ends when the returned handle is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus has shut down.
    fn subscribe(&self, topic: &str) -> Result<Subscription, BusError>;
}

/// A live subscription to a single topic.
///
/// Dropping the subscription detaches it from the bus; messages published
/// afterwards are no longer delivered.
#[derive(Debug)]
pub struct Subscription {
    topic: String,
    rx: mpsc::UnboundedReceiver<BusMessage>,
}

impl Subscription {
    pub(crate) fn new(topic: String, rx: mpsc::UnboundedReceiver<BusMessage>) -> Self {
        Self { topic, rx }
    }

    /// The topic this subscription is attached to.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Wait for the next message.
    ///
    /// Returns `None` once the bus has shut down and all buffered messages
    /// have been drained.
    pub async fn next(&mut self) -> Option<BusMessage> {
        self.rx.recv().await
    }

    /// Take the next message if one is already buffered.
    pub fn try_next(&mut self) -> Option<BusMessage> {
        self.rx.try_recv().ok()
    }
}
