//! Wire messages exchanged with the radio stack over the bus.
//!
//! Inflow: JSON documents on [`HFP_EVENT_TOPIC`], discriminated by their
//! `action` field. Outflow: JSON documents on [`HFP_COMMAND_TOPIC`],
//! discriminated by their `command` field and published with instant QoS.
//!
//! [`HFP_EVENT_TOPIC`]: hearken_core::constants::HFP_EVENT_TOPIC
//! [`HFP_COMMAND_TOPIC`]: hearken_core::constants::HFP_COMMAND_TOPIC

use crate::state::StateUpdate;
use serde::{Deserialize, Serialize};

/// An event message received from the radio stack.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action")]
pub enum EventMessage {
    /// A partial state vector to merge and dispatch on.
    #[serde(rename = "stateupdate")]
    StateUpdate(StateUpdate),

    /// Ringing indication. Ignored by the adapter: ringing is signaled
    /// through the `setup=incoming` transition instead, so acting on both
    /// would double-report the call.
    #[serde(rename = "ring")]
    Ring,

    /// Any action this adapter does not define behavior for.
    #[serde(other)]
    Unknown,
}

/// A command message addressed to the radio stack.
///
/// Commands are fire-and-forget: no acknowledgement is awaited, and
/// outcomes are observed through subsequent state events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum HfpCommand {
    /// Turn the radio on and bring up the hands-free profile.
    #[serde(rename = "ON")]
    On {
        /// Local device name advertised to peers.
        name: String,
        /// Whether the stack should enforce a unique advertised name.
        unique: bool,
    },

    /// Turn the radio off.
    #[serde(rename = "OFF")]
    Off,

    /// Answer the incoming call.
    #[serde(rename = "ANSWERCALL")]
    AnswerCall,

    /// Hang up the current call.
    #[serde(rename = "HANGUP")]
    Hangup,

    /// Place an outgoing call. The number is passed through opaquely.
    #[serde(rename = "DIALING")]
    Dialing {
        #[serde(rename = "NUMBER")]
        number: String,
    },
}
