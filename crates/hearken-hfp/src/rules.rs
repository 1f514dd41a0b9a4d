//! Declarative mapping from raw state updates to semantic events.
//!
//! The mapping is an ordered table of (filter, event) pairs kept as data,
//! not code: every rule whose filter matches an incoming update fires, in
//! table order, and the table can be replaced wholesale at adapter
//! construction or deserialized from deployment configuration.
//!
//! The default table keys each transition off the narrowest field set
//! that identifies it, which suits daemons reporting sparse updates (only
//! the fields that changed). A daemon that reports the full vector on
//! every update needs a table with compound filters instead — narrow
//! filters would fire on every report that happens to carry their fields.

use crate::event::HfpEvent;
use crate::state::{CallActivity, CallSetup, ConnectState, HfpState, StateFilter};
use hearken_core::{CallState, ConnectionState, RadioState};
use serde::{Deserialize, Serialize};

/// One row of the mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRule {
    /// Partial pattern tested against the incoming update.
    pub when: StateFilter,

    /// Event raised when the pattern matches.
    pub emit: HfpEvent,
}

impl StateRule {
    pub fn new(when: StateFilter, emit: HfpEvent) -> Self {
        Self { when, emit }
    }
}

/// The baseline mapping table.
///
/// Covers the radio, connection, and call transitions the platform apps
/// consume. Unmapped combinations are logged by the adapter as mapping
/// gaps; extend the table as new raw-state combinations are observed.
pub fn default_rules() -> Vec<StateRule> {
    vec![
        // Radio lifecycle from hfpstate alone.
        StateRule::new(
            StateFilter::any().with_hfpstate(HfpState::Opened),
            HfpEvent::RadioStateChanged(RadioState::On),
        ),
        StateRule::new(
            StateFilter::any().with_hfpstate(HfpState::OpenFailed),
            HfpEvent::RadioStateChanged(RadioState::OnFailed),
        ),
        StateRule::new(
            StateFilter::any().with_hfpstate(HfpState::Closed),
            HfpEvent::RadioStateChanged(RadioState::Off),
        ),
        // Connection transitions from connect_state.
        StateRule::new(
            StateFilter::any().with_connect_state(ConnectState::Connected),
            HfpEvent::ConnectionStateChanged(ConnectionState::Connected),
        ),
        StateRule::new(
            StateFilter::any().with_connect_state(ConnectState::Disconnected),
            HfpEvent::ConnectionStateChanged(ConnectionState::Disconnected),
        ),
        StateRule::new(
            StateFilter::any().with_connect_state(ConnectState::ConnectFailed),
            HfpEvent::ConnectionStateChanged(ConnectionState::ConnectFailed),
        ),
        // Call progress from the call/setup pair. Incoming setup doubles
        // as the ringing indication.
        StateRule::new(
            StateFilter::any()
                .with_call(CallActivity::Inactive)
                .with_setup(CallSetup::Incoming),
            HfpEvent::CallStateChanged(CallState::Incoming),
        ),
        StateRule::new(
            StateFilter::any()
                .with_call(CallActivity::Inactive)
                .with_setup(CallSetup::Outgoing),
            HfpEvent::CallStateChanged(CallState::Outgoing),
        ),
        StateRule::new(
            StateFilter::any()
                .with_call(CallActivity::Inactive)
                .with_setup(CallSetup::Alerting),
            HfpEvent::CallStateChanged(CallState::Alerting),
        ),
        StateRule::new(
            StateFilter::any()
                .with_call(CallActivity::Active)
                .with_setup(CallSetup::None),
            HfpEvent::CallStateChanged(CallState::Active),
        ),
        StateRule::new(
            StateFilter::any()
                .with_call(CallActivity::Inactive)
                .with_setup(CallSetup::None),
            HfpEvent::CallStateChanged(CallState::Idle),
        ),
    ]
}
