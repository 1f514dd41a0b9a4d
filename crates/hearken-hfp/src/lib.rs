//! Bluetooth hands-free profile (HFP) state adapter.
//!
//! The radio stack reports hands-free status as raw state vectors on a
//! bus topic. This crate turns those reports into a small, queryable
//! surface for platform apps:
//!
//! - one tracked [`StateVector`], merged field-wise on every accepted
//!   update and never replaced wholesale;
//! - duplicate reports suppressed before they reach any listener;
//! - accepted updates mapped to semantic events ([`HfpEvent`]) through an
//!   ordered, data-driven rule table;
//! - imperative call control (open/close/answer/hangup/dial) encoded as
//!   fire-and-forget command messages on the bus;
//! - synchronous queries over the last-known state.
//!
//! See [`HfpAdapter`] for the component itself.

pub mod adapter;
pub mod event;
pub mod message;
pub mod rules;
pub mod state;

pub use adapter::HfpAdapter;
pub use event::{EventListeners, HfpEvent};
pub use message::{EventMessage, HfpCommand};
pub use rules::{StateRule, default_rules};
pub use state::{
    AudioState, CallActivity, CallHeld, CallSetup, ConnectState, HfpState, ServiceState,
    StateFilter, StateUpdate, StateVector,
};

// Re-export the semantic vocabulary for convenience.
pub use hearken_core::{CallState, ConnectedDevice, ConnectionState, RadioState};
