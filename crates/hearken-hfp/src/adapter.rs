//! The HFP state adapter.
//!
//! Sits between the radio stack's raw state reports and the platform
//! apps: tracks the last-known state vector, suppresses duplicate
//! reports, translates accepted updates into semantic events through the
//! rule table, and encodes imperative call-control commands back onto the
//! bus.

use crate::event::EventListeners;
use crate::message::{EventMessage, HfpCommand};
use crate::rules::{StateRule, default_rules};
use crate::state::{CallActivity, ConnectState, HfpState, StateUpdate, StateVector};
use hearken_bus::{BusConnection, BusMessage, QoS, Subscription};
use hearken_core::constants::{DESTROY_GRACE_MS, HFP_COMMAND_TOPIC, HFP_EVENT_TOPIC};
use hearken_core::{ConnectedDevice, Error, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Bluetooth hands-free profile adapter.
///
/// One adapter owns one [`StateVector`] for its lifetime, one bus
/// subscription on the HFP event topic, and the listener registry its
/// semantic events are delivered through. All processing happens on the
/// single task driving [`run`](HfpAdapter::run) (or calling
/// [`handle_message`](HfpAdapter::handle_message) directly); there is no
/// interior locking.
///
/// # Example
///
/// ```
/// use hearken_bus::LocalBus;
/// use hearken_hfp::HfpAdapter;
/// use std::sync::Arc;
/// use serde_json::json;
///
/// # fn main() -> hearken_core::Result<()> {
/// let bus = Arc::new(LocalBus::new());
/// let mut hfp = HfpAdapter::new("Speaker", bus.clone())?;
///
/// hfp.on_radio_state_changed(|state| println!("radio: {state}"));
/// hfp.open()?;
///
/// // Raw updates arrive on the event topic; drive them through the
/// // adapter (normally via `run().await`).
/// let payload = serde_json::to_vec(&json!({
///     "action": "stateupdate",
///     "hfpstate": "opened",
/// })).unwrap();
/// hfp.handle_message(&payload);
/// assert!(hfp.is_opened());
/// # Ok(())
/// # }
/// ```
pub struct HfpAdapter {
    /// Local device name advertised by the `ON` command.
    local_name: String,

    /// Last-known full state vector.
    state: StateVector,

    /// Ordered mapping table; every matching rule fires.
    rules: Vec<StateRule>,

    /// Listener registry for outflow events.
    listeners: EventListeners,

    bus: Arc<dyn BusConnection>,

    /// Live event subscription; dropped at teardown.
    subscription: Option<Subscription>,

    /// Deadline set by `destroy()`; when it lapses the adapter terminates.
    destroy_deadline: Option<Instant>,

    terminated: bool,
}

enum Step {
    Message(BusMessage),
    GraceLapsed,
    BusClosed,
}

impl HfpAdapter {
    /// Create an adapter with the default rule table.
    ///
    /// Subscribes to the HFP event topic immediately; nothing is sent to
    /// the radio until a command method is invoked.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus refuses the subscription.
    pub fn new(device_name: impl Into<String>, bus: Arc<dyn BusConnection>) -> Result<Self> {
        Self::with_rules(device_name, bus, default_rules())
    }

    /// Create an adapter with a deployment-specific rule table.
    pub fn with_rules(
        device_name: impl Into<String>,
        bus: Arc<dyn BusConnection>,
        rules: Vec<StateRule>,
    ) -> Result<Self> {
        let subscription = bus
            .subscribe(HFP_EVENT_TOPIC)
            .map_err(|e| Error::BusUnavailable(e.to_string()))?;

        Ok(Self {
            local_name: device_name.into(),
            state: StateVector::default(),
            rules,
            listeners: EventListeners::new(),
            bus,
            subscription: Some(subscription),
            destroy_deadline: None,
            terminated: false,
        })
    }

    // ------------------------------------------------------------------
    // Listener registration
    // ------------------------------------------------------------------

    /// Listen for radio on/off/on-failed events.
    pub fn on_radio_state_changed(
        &mut self,
        listener: impl FnMut(hearken_core::RadioState) + Send + 'static,
    ) {
        self.listeners.on_radio_state_changed(listener);
    }

    /// Listen for connect/disconnect/connect-failed events.
    pub fn on_connection_state_changed(
        &mut self,
        listener: impl FnMut(hearken_core::ConnectionState) + Send + 'static,
    ) {
        self.listeners.on_connection_state_changed(listener);
    }

    /// Listen for call progress events.
    pub fn on_call_state_changed(
        &mut self,
        listener: impl FnMut(hearken_core::CallState) + Send + 'static,
    ) {
        self.listeners.on_call_state_changed(listener);
    }

    // ------------------------------------------------------------------
    // Event inflow
    // ------------------------------------------------------------------

    /// Drive the adapter until it terminates.
    ///
    /// Processes bus messages as they arrive. After [`destroy`] has been
    /// called, messages keep being processed until the grace deadline
    /// lapses, at which point the subscription is released and the
    /// adapter terminates.
    ///
    /// [`destroy`]: HfpAdapter::destroy
    pub async fn run(&mut self) {
        loop {
            if self.terminated {
                return;
            }
            let step = {
                let Some(subscription) = self.subscription.as_mut() else {
                    return;
                };
                let deadline = self.destroy_deadline;
                tokio::select! {
                    maybe = subscription.next() => match maybe {
                        Some(msg) => Step::Message(msg),
                        None => Step::BusClosed,
                    },
                    _ = wait_until(deadline) => Step::GraceLapsed,
                }
            };
            match step {
                Step::Message(msg) => self.handle_message(&msg.payload),
                Step::GraceLapsed => {
                    debug!("destroy grace window lapsed");
                    self.terminate();
                }
                Step::BusClosed => {
                    warn!("event bus closed; terminating adapter");
                    self.terminate();
                }
            }
        }
    }

    /// Feed one raw bus payload through the adapter.
    ///
    /// Malformed payloads fail only the single message: they are logged
    /// and dropped. Payloads arriving after termination are dropped with
    /// a warning and never reactivate the adapter.
    pub fn handle_message(&mut self, payload: &[u8]) {
        if self.terminated {
            warn!("event received after adapter teardown; dropping");
            return;
        }

        let message: EventMessage = match serde_json::from_slice(payload) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "dropping malformed event payload");
                return;
            }
        };

        match message {
            EventMessage::StateUpdate(update) => self.on_state_update(update),
            // Ringing is reported through setup=incoming instead; acting
            // on both would double-signal the call.
            EventMessage::Ring => debug!("ignoring ring action"),
            EventMessage::Unknown => {}
        }
    }

    fn on_state_update(&mut self, update: StateUpdate) {
        debug!(last = ?self.state, now = ?update, "state update");

        if update.as_filter().matches(&self.state) {
            warn!("received duplicate state update");
            return;
        }

        update.apply_to(&mut self.state);

        let mut hit = false;
        for rule in &self.rules {
            if rule.when.matches_update(&update) {
                debug!(event = ?rule.emit, "state rule matched");
                self.listeners.emit(rule.emit);
                hit = true;
            }
        }
        if !hit {
            warn!("state update matched no rule; check the state mapping table");
        }
    }

    // ------------------------------------------------------------------
    // Command outflow
    // ------------------------------------------------------------------

    /// Turn the radio on, advertising the local device name.
    ///
    /// Outcome arrives as a `radio_state_changed` event (`ON` or
    /// `ON_FAILED`).
    pub fn open(&self) -> Result<()> {
        debug!("open()");
        self.send(HfpCommand::On {
            name: self.local_name.clone(),
            unique: false,
        })
    }

    /// Turn the radio off.
    ///
    /// Sent even when the profile already reports closed — the command is
    /// idempotent downstream — but the redundant request is logged.
    pub fn close(&self) -> Result<()> {
        debug!(hfpstate = ?self.state.hfpstate, "close()");
        if self.state.hfpstate == HfpState::Closed {
            warn!("close() while profile already closed");
        }
        self.send(HfpCommand::Off)
    }

    /// Answer the incoming call.
    pub fn answer(&self) -> Result<()> {
        debug!("answer()");
        self.send(HfpCommand::AnswerCall)
    }

    /// Hang up the current call.
    pub fn hangup(&self) -> Result<()> {
        debug!("hangup()");
        self.send(HfpCommand::Hangup)
    }

    /// Place an outgoing call. The number is not validated locally.
    pub fn dial(&self, number: impl Into<String>) -> Result<()> {
        let number = number.into();
        debug!(%number, "dial()");
        self.send(HfpCommand::Dialing { number })
    }

    fn send(&self, command: HfpCommand) -> Result<()> {
        let payload = serde_json::to_value(&command)
            .map_err(|e| Error::InvalidPayload(e.to_string()))?;
        self.bus
            .publish(HFP_COMMAND_TOPIC, &payload, QoS::Instant)
            .map_err(|e| Error::BusUnavailable(e.to_string()))
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Whether the hands-free profile is up.
    pub fn is_opened(&self) -> bool {
        self.state.hfpstate == HfpState::Opened
    }

    /// Whether a remote device is connected.
    pub fn is_connected(&self) -> bool {
        self.state.connect_state == ConnectState::Connected
    }

    /// The connected remote device, if any.
    pub fn connected_device(&self) -> Option<ConnectedDevice> {
        if !self.is_connected() {
            return None;
        }
        Some(ConnectedDevice {
            address: self.state.connect_address.clone().unwrap_or_default(),
            name: self.state.connect_name.clone().unwrap_or_default(),
        })
    }

    /// Whether a call is established.
    pub fn is_calling(&self) -> bool {
        self.state.call == CallActivity::Active
    }

    /// The last-known full state vector.
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    // ------------------------------------------------------------------
    // Teardown
    // ------------------------------------------------------------------

    /// Begin teardown: issue a final close command, then let a grace
    /// window elapse before resources are released.
    ///
    /// The window gives the `OFF` command a chance to propagate; events
    /// arriving within it are still processed (see [`run`]). A failed
    /// close publish does not abort teardown.
    ///
    /// [`run`]: HfpAdapter::run
    pub fn destroy(&mut self) {
        if self.terminated || self.destroy_deadline.is_some() {
            warn!("destroy() called more than once");
            return;
        }
        if let Err(e) = self.close() {
            warn!(error = %e, "final close failed during destroy");
        }
        self.destroy_deadline = Some(Instant::now() + Duration::from_millis(DESTROY_GRACE_MS));
    }

    /// Whether teardown has completed.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    fn terminate(&mut self) {
        self.subscription = None;
        self.listeners.clear();
        self.terminated = true;
        debug!("adapter terminated");
    }
}

impl std::fmt::Debug for HfpAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HfpAdapter")
            .field("local_name", &self.local_name)
            .field("state", &self.state)
            .field("rules", &self.rules.len())
            .field("listeners", &self.listeners)
            .field("terminated", &self.terminated)
            .finish()
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
