//! The HFP state vector and its wildcard match predicate.
//!
//! The radio stack reports hands-free status as a vector of enumerated
//! fields. The adapter tracks one [`StateVector`] for its lifetime and
//! merges every accepted [`StateUpdate`] into it field by field; the
//! vector is never replaced wholesale.
//!
//! Matching is deliberately partial: a [`StateFilter`] defines a subset of
//! fields, and any field it leaves unset matches anything. The same
//! predicate backs both duplicate suppression (the incoming update used as
//! the filter against the tracked vector) and rule dispatch (a rule's
//! filter tested against the incoming update).

use serde::{Deserialize, Serialize};

/// Hands-free profile lifecycle state (`hfpstate`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HfpState {
    /// Not yet reported by the radio stack.
    Invalid,
    /// Profile is up.
    Opened,
    /// Bringing the profile up failed.
    OpenFailed,
    /// Profile is shutting down.
    Closing,
    /// Profile is down.
    Closed,
}

/// Remote device connection state (`connect_state`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectState {
    Invalid,
    Connecting,
    Connected,
    ConnectFailed,
    Disconnecting,
    Disconnected,
}

/// Network service availability on the connected handset (`service`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceState {
    Inactive,
    Active,
}

/// Whether a call is established (`call`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallActivity {
    Inactive,
    Active,
}

/// Call setup progress (`setup`).
///
/// An incoming setup doubles as the ringing indication; the radio stack's
/// dedicated ring action is ignored in favor of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallSetup {
    None,
    Incoming,
    Outgoing,
    Alerting,
}

/// Call hold status (`held`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallHeld {
    None,
    HoldActive,
    Hold,
}

/// SCO audio routing state (`audio`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioState {
    On,
    Off,
}

/// The authoritative snapshot of hands-free status.
///
/// Every field always holds a defined value; the initial vector marks the
/// radio-derived fields `invalid`/`none`/`off` until the stack reports
/// real values, with `service` assumed `active`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateVector {
    pub hfpstate: HfpState,
    pub connect_state: ConnectState,
    pub connect_address: Option<String>,
    pub connect_name: Option<String>,
    pub service: ServiceState,
    pub call: CallActivity,
    pub setup: CallSetup,
    pub held: CallHeld,
    pub audio: AudioState,
}

impl Default for StateVector {
    fn default() -> Self {
        Self {
            hfpstate: HfpState::Invalid,
            connect_state: ConnectState::Invalid,
            connect_address: None,
            connect_name: None,
            service: ServiceState::Active,
            call: CallActivity::Inactive,
            setup: CallSetup::None,
            held: CallHeld::None,
            audio: AudioState::Off,
        }
    }
}

/// A partial state vector carried by a `stateupdate` message.
///
/// Fields absent from the payload keep their previous value on merge and
/// act as wildcards during matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hfpstate: Option<HfpState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_state: Option<ConnectState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call: Option<CallActivity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup: Option<CallSetup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub held: Option<CallHeld>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioState>,
}

impl StateUpdate {
    /// View the update's enumerated fields as a match filter.
    ///
    /// Used for duplicate suppression: an update whose filter matches the
    /// tracked vector carries no new information.
    pub fn as_filter(&self) -> StateFilter {
        StateFilter {
            hfpstate: self.hfpstate,
            connect_state: self.connect_state,
            service: self.service,
            call: self.call,
            setup: self.setup,
            held: self.held,
            audio: self.audio,
        }
    }

    /// Merge this update into `vector`, overwriting only the fields the
    /// update defines.
    pub fn apply_to(&self, vector: &mut StateVector) {
        if let Some(v) = self.hfpstate {
            vector.hfpstate = v;
        }
        if let Some(v) = self.connect_state {
            vector.connect_state = v;
        }
        if let Some(v) = &self.connect_address {
            vector.connect_address = Some(v.clone());
        }
        if let Some(v) = &self.connect_name {
            vector.connect_name = Some(v.clone());
        }
        if let Some(v) = self.service {
            vector.service = v;
        }
        if let Some(v) = self.call {
            vector.call = v;
        }
        if let Some(v) = self.setup {
            vector.setup = v;
        }
        if let Some(v) = self.held {
            vector.held = v;
        }
        if let Some(v) = self.audio {
            vector.audio = v;
        }
    }

    /// True if the update defines no enumerated field at all.
    pub fn is_empty(&self) -> bool {
        self.as_filter() == StateFilter::default()
    }
}

/// A partial predicate over the enumerated state fields.
///
/// Addresses and names never participate in matching; they are carried as
/// metadata only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hfpstate: Option<HfpState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_state: Option<ConnectState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call: Option<CallActivity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup: Option<CallSetup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub held: Option<CallHeld>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioState>,
}

impl StateFilter {
    /// A filter with every field unset; matches any vector.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_hfpstate(mut self, value: HfpState) -> Self {
        self.hfpstate = Some(value);
        self
    }

    pub fn with_connect_state(mut self, value: ConnectState) -> Self {
        self.connect_state = Some(value);
        self
    }

    pub fn with_service(mut self, value: ServiceState) -> Self {
        self.service = Some(value);
        self
    }

    pub fn with_call(mut self, value: CallActivity) -> Self {
        self.call = Some(value);
        self
    }

    pub fn with_setup(mut self, value: CallSetup) -> Self {
        self.setup = Some(value);
        self
    }

    pub fn with_held(mut self, value: CallHeld) -> Self {
        self.held = Some(value);
        self
    }

    pub fn with_audio(mut self, value: AudioState) -> Self {
        self.audio = Some(value);
        self
    }

    /// Test this filter against a full vector.
    ///
    /// True iff every field the filter defines equals the same field in
    /// `vector`. An empty filter matches every vector.
    pub fn matches(&self, vector: &StateVector) -> bool {
        self.hfpstate.is_none_or(|v| v == vector.hfpstate)
            && self.connect_state.is_none_or(|v| v == vector.connect_state)
            && self.service.is_none_or(|v| v == vector.service)
            && self.call.is_none_or(|v| v == vector.call)
            && self.setup.is_none_or(|v| v == vector.setup)
            && self.held.is_none_or(|v| v == vector.held)
            && self.audio.is_none_or(|v| v == vector.audio)
    }

    /// Test this filter against a partial update.
    ///
    /// Every field the filter defines must be present in the update with
    /// an equal value; a field the update omits does not satisfy a defined
    /// filter field.
    pub fn matches_update(&self, update: &StateUpdate) -> bool {
        self.hfpstate.is_none_or(|v| update.hfpstate == Some(v))
            && self
                .connect_state
                .is_none_or(|v| update.connect_state == Some(v))
            && self.service.is_none_or(|v| update.service == Some(v))
            && self.call.is_none_or(|v| update.call == Some(v))
            && self.setup.is_none_or(|v| update.setup == Some(v))
            && self.held.is_none_or(|v| update.held == Some(v))
            && self.audio.is_none_or(|v| update.audio == Some(v))
    }
}
