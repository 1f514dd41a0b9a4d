//! In-process topic broker.

use crate::{BusConnection, BusError, BusMessage, QoS, Subscription};
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::{debug, trace};

/// An in-process message broker implementing [`BusConnection`].
///
/// Topics are created implicitly on first use. Delivery is fan-out: every
/// live subscription on a topic receives its own copy of each message.
/// With [`QoS::Persist`] the latest message per topic is retained and
/// replayed to subscribers that attach later, mirroring the persisted
/// delivery mode of the platform bus.
///
/// Cloning the bus clones the handle, not the broker; all clones share
/// the same topics and subscribers.
#[derive(Debug, Clone, Default)]
pub struct LocalBus {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    subscribers: Vec<Subscriber>,
    retained: HashMap<String, Bytes>,
}

#[derive(Debug)]
struct Subscriber {
    topic: String,
    tx: mpsc::UnboundedSender<BusMessage>,
}

impl LocalBus {
    /// Create an empty broker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscriptions across all topics.
    ///
    /// Subscriptions whose handle was dropped are counted until the next
    /// publish on their topic prunes them.
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().expect("bus lock poisoned").subscribers.len()
    }
}

impl BusConnection for LocalBus {
    fn publish(&self, topic: &str, payload: &serde_json::Value, qos: QoS) -> Result<(), BusError> {
        let bytes = Bytes::from(serde_json::to_vec(payload)?);
        let mut inner = self.inner.lock().expect("bus lock poisoned");

        if qos == QoS::Persist {
            inner.retained.insert(topic.to_string(), bytes.clone());
        }

        let mut delivered = 0usize;
        inner.subscribers.retain(|sub| {
            if sub.topic != topic {
                return true;
            }
            let msg = BusMessage::new(topic, bytes.clone());
            match sub.tx.send(msg) {
                Ok(()) => {
                    delivered += 1;
                    true
                }
                // Receiver gone: the subscription handle was dropped.
                Err(_) => false,
            }
        });

        trace!(topic, delivered, "published message");
        Ok(())
    }

    fn subscribe(&self, topic: &str) -> Result<Subscription, BusError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock().expect("bus lock poisoned");

        if let Some(retained) = inner.retained.get(topic) {
            // Cannot fail: rx is still held right here.
            let _ = tx.send(BusMessage::new(topic, retained.clone()));
        }

        inner.subscribers.push(Subscriber {
            topic: topic.to_string(),
            tx,
        });

        debug!(topic, "new subscription");
        Ok(Subscription::new(topic.to_string(), rx))
    }
}
