//! Publish/subscribe seam between device shims and the platform daemons.
//!
//! Every shim in this workspace talks to its backing daemon over a topic
//! bus: raw events flow in on a subscribed topic, commands flow out as
//! fire-and-forget publishes. This crate defines that seam — the message
//! envelope, the QoS levels, the [`BusConnection`] trait — together with
//! [`LocalBus`], an in-process broker implementing it.
//!
//! The socket transport that bridges to the actual daemons is deployment
//! infrastructure and lives outside this repository; anything that speaks
//! the trait can stand in for it.
//!
//! # Example
//!
//! ```
//! use hearken_bus::{BusConnection, LocalBus, QoS};
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), hearken_bus::BusError> {
//! let bus = LocalBus::new();
//! let mut sub = bus.subscribe("sensors.temp")?;
//!
//! bus.publish("sensors.temp", &json!({"celsius": 21}), QoS::Instant)?;
//!
//! let msg = sub.next().await.unwrap();
//! assert_eq!(msg.topic, "sensors.temp");
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod local;
pub mod message;

pub use connection::{BusConnection, Subscription};
pub use local::LocalBus;
pub use message::{BusMessage, QoS};

use thiserror::Error;

/// Errors that can occur on the bus seam.
#[derive(Debug, Error)]
pub enum BusError {
    /// The payload could not be encoded for the wire.
    #[error("Failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    /// The bus has shut down and no longer accepts traffic.
    #[error("Bus closed")]
    Closed,
}
