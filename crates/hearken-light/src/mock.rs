//! Mock light device for testing and development.

use crate::device::LightDevice;
use crate::{LightError, Result};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Inner {
    frames: Vec<Vec<u8>>,
    fail_render: Option<String>,
}

/// Mock implementation of [`LightDevice`] recording every rendered frame.
#[derive(Debug)]
pub struct MockLight {
    pixel_count: usize,
    inner: Arc<Mutex<Inner>>,
}

impl MockLight {
    /// Create a mock device with `pixel_count` pixels.
    pub fn new(pixel_count: usize) -> (Self, MockLightHandle) {
        let inner = Arc::new(Mutex::new(Inner::default()));
        let handle = MockLightHandle {
            inner: Arc::clone(&inner),
        };
        (Self { pixel_count, inner }, handle)
    }
}

impl LightDevice for MockLight {
    fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    async fn render(&mut self, frame: &[u8]) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(message) = inner.fail_render.take() {
            return Err(LightError::render_failed(message));
        }
        inner.frames.push(frame.to_vec());
        Ok(())
    }
}

/// Handle for inspecting and scripting a [`MockLight`].
#[derive(Debug, Clone)]
pub struct MockLightHandle {
    inner: Arc<Mutex<Inner>>,
}

impl MockLightHandle {
    /// Every frame rendered so far, in order.
    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.inner.lock().unwrap().frames.clone()
    }

    /// The most recently rendered frame, if any.
    pub fn last_frame(&self) -> Option<Vec<u8>> {
        self.inner.lock().unwrap().frames.last().cloned()
    }

    /// Make the next `render` call fail with `message`.
    pub fn fail_next_render(&self, message: impl Into<String>) {
        self.inner.lock().unwrap().fail_render = Some(message.into());
    }
}
