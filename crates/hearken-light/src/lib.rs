//! LED ring frame utility.
//!
//! The device's LED ring is driven by writing a full RGB frame (3 bytes
//! per pixel) to the native light device. This crate owns that frame:
//! [`LightController`] fills it with alpha-scaled colors and writes it —
//! or an externally built buffer — through the [`LightDevice`] seam.

pub mod color;
pub mod controller;
pub mod device;
pub mod mock;

pub use color::LedColor;
pub use controller::LightController;
pub use device::LightDevice;
pub use mock::{MockLight, MockLightHandle};

/// Result type alias for light operations.
pub type Result<T> = std::result::Result<T, LightError>;

/// Errors that can occur while driving the light device.
#[derive(Debug, thiserror::Error)]
pub enum LightError {
    /// The native device rejected a frame.
    #[error("Render failed: {message}")]
    RenderFailed { message: String },

    /// The device is gone.
    #[error("Light device disconnected: {device}")]
    Disconnected { device: String },
}

impl LightError {
    /// Create a new render-failed error.
    pub fn render_failed(message: impl Into<String>) -> Self {
        Self::RenderFailed {
            message: message.into(),
        }
    }

    /// Create a new disconnected error.
    pub fn disconnected(device: impl Into<String>) -> Self {
        Self::Disconnected {
            device: device.into(),
        }
    }
}
