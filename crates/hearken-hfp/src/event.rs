//! Semantic events raised by the adapter, and their listener registry.

use hearken_core::{CallState, ConnectionState, RadioState};
use serde::{Deserialize, Serialize};

/// A semantic event produced when a state rule fires.
///
/// Serializes to the `{"type": ..., "state": ...}` document the rule
/// tables use, so tables can be loaded from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "state", rename_all = "snake_case")]
pub enum HfpEvent {
    /// The Bluetooth radio turned on/off or failed to turn on.
    RadioStateChanged(RadioState),

    /// A remote device connected, disconnected, or failed to connect.
    ConnectionStateChanged(ConnectionState),

    /// Call progress changed (ringing, dialing, established, idle).
    CallStateChanged(CallState),
}

type Listener<T> = Box<dyn FnMut(T) + Send>;

/// Callback registry keyed by event type.
///
/// The adapter composes this registry instead of inheriting an emitter
/// base: listeners register per event type and every listener for the
/// type of an emitted event is invoked in registration order.
#[derive(Default)]
pub struct EventListeners {
    radio: Vec<Listener<RadioState>>,
    connection: Vec<Listener<ConnectionState>>,
    call: Vec<Listener<CallState>>,
}

impl EventListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for `radio_state_changed` events.
    pub fn on_radio_state_changed(&mut self, listener: impl FnMut(RadioState) + Send + 'static) {
        self.radio.push(Box::new(listener));
    }

    /// Register a listener for `connection_state_changed` events.
    pub fn on_connection_state_changed(
        &mut self,
        listener: impl FnMut(ConnectionState) + Send + 'static,
    ) {
        self.connection.push(Box::new(listener));
    }

    /// Register a listener for `call_state_changed` events.
    pub fn on_call_state_changed(&mut self, listener: impl FnMut(CallState) + Send + 'static) {
        self.call.push(Box::new(listener));
    }

    /// Invoke every listener registered for the event's type.
    pub fn emit(&mut self, event: HfpEvent) {
        match event {
            HfpEvent::RadioStateChanged(state) => {
                for listener in &mut self.radio {
                    listener(state);
                }
            }
            HfpEvent::ConnectionStateChanged(state) => {
                for listener in &mut self.connection {
                    listener(state);
                }
            }
            HfpEvent::CallStateChanged(state) => {
                for listener in &mut self.call {
                    listener(state);
                }
            }
        }
    }

    /// Drop every registered listener.
    pub fn clear(&mut self) {
        self.radio.clear();
        self.connection.clear();
        self.call.clear();
    }

    /// Total number of registered listeners across all event types.
    pub fn len(&self) -> usize {
        self.radio.len() + self.connection.len() + self.call.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for EventListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventListeners")
            .field("radio", &self.radio.len())
            .field("connection", &self.connection.len())
            .field("call", &self.call.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_emit_reaches_only_matching_type() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = EventListeners::new();

        let radio_log = Arc::clone(&seen);
        listeners.on_radio_state_changed(move |state| {
            radio_log.lock().unwrap().push(format!("radio:{state}"));
        });
        let call_log = Arc::clone(&seen);
        listeners.on_call_state_changed(move |state| {
            call_log.lock().unwrap().push(format!("call:{state}"));
        });

        listeners.emit(HfpEvent::RadioStateChanged(RadioState::On));

        assert_eq!(seen.lock().unwrap().as_slice(), ["radio:ON"]);
    }

    #[test]
    fn test_multiple_listeners_invoked_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = EventListeners::new();

        for tag in ["first", "second"] {
            let log = Arc::clone(&seen);
            listeners.on_connection_state_changed(move |_| {
                log.lock().unwrap().push(tag);
            });
        }

        listeners.emit(HfpEvent::ConnectionStateChanged(ConnectionState::Connected));

        assert_eq!(seen.lock().unwrap().as_slice(), ["first", "second"]);
    }

    #[test]
    fn test_clear_removes_listeners() {
        let seen = Arc::new(Mutex::new(0u32));
        let mut listeners = EventListeners::new();

        let count = Arc::clone(&seen);
        listeners.on_radio_state_changed(move |_| {
            *count.lock().unwrap() += 1;
        });
        assert_eq!(listeners.len(), 1);

        listeners.clear();
        assert!(listeners.is_empty());

        listeners.emit(HfpEvent::RadioStateChanged(RadioState::Off));
        assert_eq!(*seen.lock().unwrap(), 0);
    }

    #[test]
    fn test_event_wire_shape() {
        let event = HfpEvent::RadioStateChanged(RadioState::OnFailed);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "radio_state_changed", "state": "ON_FAILED"})
        );

        let back: HfpEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
