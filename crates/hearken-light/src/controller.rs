//! Frame fill and write operations.

use crate::color::LedColor;
use crate::device::LightDevice;
use crate::Result;
use tracing::{debug, trace};

/// Owns the RGB frame for one LED device.
///
/// [`fill`](LightController::fill) paints the whole frame with one
/// alpha-scaled color; [`write`](LightController::write) pushes the frame
/// to the device. Externally built buffers go through
/// [`write_buffer`](LightController::write_buffer), which normalizes them
/// to the device's frame size first — oversized buffers are truncated,
/// short ones zero-padded — so callers never have to care about the
/// exact pixel count.
///
/// # Example
///
/// ```
/// use hearken_light::{LedColor, LightController, MockLight};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> hearken_light::Result<()> {
/// let (device, handle) = MockLight::new(12);
/// let mut lights = LightController::new(device);
///
/// lights.fill(LedColor::White, 1.0);
/// lights.write().await?;
///
/// assert_eq!(handle.last_frame().unwrap(), vec![255u8; 36]);
/// # Ok(())
/// # }
/// ```
pub struct LightController<D: LightDevice> {
    device: D,
    frame: Vec<u8>,
}

impl<D: LightDevice> LightController<D> {
    /// Create a controller with an all-off frame sized to the device.
    pub fn new(device: D) -> Self {
        let frame = vec![0u8; device.pixel_count() * 3];
        Self { device, frame }
    }

    /// Number of pixels on the underlying device.
    pub fn pixel_count(&self) -> usize {
        self.frame.len() / 3
    }

    /// The current frame contents (3 bytes per pixel, RGB order).
    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    /// Paint every pixel with `color` scaled by `alpha`.
    ///
    /// Alpha is clamped to `[0, 1]`; junk values are tolerated rather
    /// than rejected. Nothing reaches the device until
    /// [`write`](LightController::write).
    pub fn fill(&mut self, color: LedColor, alpha: f32) {
        let (r, g, b) = color.scaled(alpha);
        trace!(r, g, b, "fill frame");
        for pixel in self.frame.chunks_exact_mut(3) {
            pixel[0] = r;
            pixel[1] = g;
            pixel[2] = b;
        }
    }

    /// Paint every pixel with a raw RGB triple scaled by `alpha`.
    pub fn fill_rgb(&mut self, r: u8, g: u8, b: u8, alpha: f32) {
        self.fill(LedColor::rgb(r, g, b), alpha);
    }

    /// Render the internal frame to the device.
    ///
    /// # Errors
    ///
    /// Returns an error if the device rejects the frame.
    pub async fn write(&mut self) -> Result<()> {
        self.device.render(&self.frame).await
    }

    /// Render an externally built buffer.
    ///
    /// The buffer is normalized to the device's frame size: extra bytes
    /// are dropped, missing bytes read as zero. The internal frame is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the device rejects the frame.
    pub async fn write_buffer(&mut self, buffer: &[u8]) -> Result<()> {
        let mut frame = vec![0u8; self.frame.len()];
        let n = buffer.len().min(frame.len());
        frame[..n].copy_from_slice(&buffer[..n]);
        if buffer.len() != frame.len() {
            debug!(
                given = buffer.len(),
                expected = frame.len(),
                "normalized external buffer"
            );
        }
        self.device.render(&frame).await
    }
}
