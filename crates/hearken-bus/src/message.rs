//! Bus message envelope and QoS levels.

use bytes::Bytes;
use serde::de::DeserializeOwned;

/// Delivery quality for a published message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QoS {
    /// Best-effort delivery to the subscribers present at publish time.
    /// Nothing is retained; late subscribers never see the message.
    Instant,

    /// Best-effort delivery, and the latest message on the topic is
    /// retained for subscribers that attach later.
    Persist,
}

/// A message delivered over a bus topic.
///
/// The payload is an opaque byte buffer; by convention every topic in this
/// workspace carries a single JSON document per message.
#[derive(Debug, Clone)]
pub struct BusMessage {
    /// Topic the message was published on.
    pub topic: String,

    /// Raw payload bytes.
    pub payload: Bytes,
}

impl BusMessage {
    /// Create a message from a topic and raw payload.
    pub fn new(topic: impl Into<String>, payload: Bytes) -> Self {
        Self {
            topic: topic.into(),
            payload,
        }
    }

    /// Decode the payload as JSON into `T`.
    ///
    /// # Errors
    ///
    /// Returns the underlying decode error if the payload is not valid
    /// JSON or does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Probe {
        action: String,
    }

    #[test]
    fn test_json_decode() {
        let msg = BusMessage::new("t", Bytes::from_static(br#"{"action":"ring"}"#));
        let probe: Probe = msg.json().unwrap();
        assert_eq!(probe.action, "ring");
    }

    #[test]
    fn test_json_decode_failure() {
        let msg = BusMessage::new("t", Bytes::from_static(b"not json"));
        let result: Result<Probe, _> = msg.json();
        assert!(result.is_err());
    }
}
