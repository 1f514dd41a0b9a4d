//! Light device abstraction.

#![allow(async_fn_in_trait)]

use crate::Result;

/// The native LED device surface.
///
/// A device renders complete RGB frames; partial updates do not exist at
/// this level. Implementations are used through generics (native `async
/// fn` in traits, RPITIT).
pub trait LightDevice: Send + Sync {
    /// Number of pixels on the device.
    fn pixel_count(&self) -> usize;

    /// Render a full frame (3 bytes per pixel, RGB order).
    ///
    /// The frame slice is always exactly `pixel_count() * 3` bytes; the
    /// controller normalizes caller buffers before they get here.
    ///
    /// # Errors
    ///
    /// Returns an error if the device rejects the frame or is gone.
    async fn render(&mut self, frame: &[u8]) -> Result<()>;
}
