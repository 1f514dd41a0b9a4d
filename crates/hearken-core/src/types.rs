//! Semantic event vocabulary shared between the HFP adapter and its
//! consumers.
//!
//! These enums are the *outflow* side of the adapter: raw state vectors
//! from the radio stack are translated into these values by the rule
//! table. Wire names use the uppercase protocol spelling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bluetooth radio power state, emitted as `radio_state_changed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RadioState {
    /// Radio turned on and the profile is up.
    On,
    /// Radio turned off.
    Off,
    /// Turning the radio on failed.
    OnFailed,
}

/// Remote device connection state, emitted as `connection_state_changed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionState {
    /// Connected to a remote device.
    Connected,
    /// Disconnected from the remote device.
    Disconnected,
    /// Connecting to a remote device failed.
    ConnectFailed,
    /// Reconnecting to the last paired device after power-on failed.
    AutoconnectFailed,
}

/// Call progress state, emitted as `call_state_changed`.
///
/// The exact set of values a deployment sees is defined by its rule table;
/// these are the values the default table emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallState {
    /// No call activity.
    Idle,
    /// Incoming call ringing.
    Incoming,
    /// Outgoing call being placed.
    Outgoing,
    /// Outgoing call alerting at the remote end.
    Alerting,
    /// Call established.
    Active,
}

impl fmt::Display for RadioState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadioState::On => write!(f, "ON"),
            RadioState::Off => write!(f, "OFF"),
            RadioState::OnFailed => write!(f, "ON_FAILED"),
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionState::Connected => write!(f, "CONNECTED"),
            ConnectionState::Disconnected => write!(f, "DISCONNECTED"),
            ConnectionState::ConnectFailed => write!(f, "CONNECT_FAILED"),
            ConnectionState::AutoconnectFailed => write!(f, "AUTOCONNECT_FAILED"),
        }
    }
}

impl fmt::Display for CallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallState::Idle => write!(f, "IDLE"),
            CallState::Incoming => write!(f, "INCOMING"),
            CallState::Outgoing => write!(f, "OUTGOING"),
            CallState::Alerting => write!(f, "ALERTING"),
            CallState::Active => write!(f, "ACTIVE"),
        }
    }
}

/// A remote Bluetooth device the adapter is connected to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedDevice {
    /// The device's MAC address, as reported by the radio stack.
    pub address: String,

    /// The device's advertised name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RadioState::On, "\"ON\"")]
    #[case(RadioState::Off, "\"OFF\"")]
    #[case(RadioState::OnFailed, "\"ON_FAILED\"")]
    fn test_radio_state_wire_names(#[case] state: RadioState, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&state).unwrap(), expected);
    }

    #[rstest]
    #[case(ConnectionState::Connected, "CONNECTED")]
    #[case(ConnectionState::Disconnected, "DISCONNECTED")]
    #[case(ConnectionState::ConnectFailed, "CONNECT_FAILED")]
    #[case(ConnectionState::AutoconnectFailed, "AUTOCONNECT_FAILED")]
    fn test_connection_state_display(#[case] state: ConnectionState, #[case] expected: &str) {
        assert_eq!(state.to_string(), expected);
    }

    #[test]
    fn test_call_state_roundtrip() {
        for state in [
            CallState::Idle,
            CallState::Incoming,
            CallState::Outgoing,
            CallState::Alerting,
            CallState::Active,
        ] {
            let json = serde_json::to_string(&state).unwrap();
            let back: CallState = serde_json::from_str(&json).unwrap();
            assert_eq!(back, state);
        }
    }

    #[test]
    fn test_connected_device_serialization() {
        let device = ConnectedDevice {
            address: "AA:BB:CC:DD:EE:FF".to_string(),
            name: "Phone".to_string(),
        };
        let json = serde_json::to_string(&device).unwrap();
        assert!(json.contains("AA:BB:CC:DD:EE:FF"));

        let back: ConnectedDevice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, device);
    }
}
