//! Mock playback engine for testing and development.
//!
//! Records every call made through the [`AudioEngine`] trait and lets
//! tests script failures, without touching any native player.

use crate::engine::{AudioEngine, StreamType};
use crate::error::{MediaError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A recorded `prepare` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedPlayback {
    pub path: PathBuf,
    pub stream: String,
    pub hold_connection: bool,
}

#[derive(Debug, Default)]
struct Inner {
    loaded: Vec<PathBuf>,
    prepared: Vec<PreparedPlayback>,
    starts: u32,
    stops: u32,
    volumes: HashMap<StreamType, u8>,
    volume_updates: Vec<(StreamType, u8)>,
    fail_load: Option<String>,
    fail_prepare: Option<String>,
    fail_start: Option<String>,
}

/// Mock implementation of [`AudioEngine`].
///
/// Create with [`MockEngine::new`], which also returns a
/// [`MockEngineHandle`] for inspecting recorded calls after the engine
/// has been moved into a player.
#[derive(Debug)]
pub struct MockEngine {
    inner: Arc<Mutex<Inner>>,
}

impl MockEngine {
    /// Create a mock engine with every stream volume set to 50.
    pub fn new() -> (Self, MockEngineHandle) {
        let mut volumes = HashMap::new();
        for stream in [
            StreamType::System,
            StreamType::Playback,
            StreamType::Tts,
            StreamType::Alarm,
            StreamType::Notification,
        ] {
            volumes.insert(stream, 50);
        }
        let inner = Arc::new(Mutex::new(Inner {
            volumes,
            ..Inner::default()
        }));
        let handle = MockEngineHandle {
            inner: Arc::clone(&inner),
        };
        (Self { inner }, handle)
    }
}

impl AudioEngine for MockEngine {
    async fn load(&mut self, paths: &[PathBuf]) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(message) = inner.fail_load.take() {
            return Err(MediaError::engine(message));
        }
        inner.loaded.extend_from_slice(paths);
        Ok(())
    }

    async fn prepare(&mut self, path: &Path, stream: &str, hold_connection: bool) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(message) = inner.fail_prepare.take() {
            return Err(MediaError::engine(message));
        }
        inner.prepared.push(PreparedPlayback {
            path: path.to_path_buf(),
            stream: stream.to_string(),
            hold_connection,
        });
        Ok(())
    }

    async fn start(&mut self) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(message) = inner.fail_start.take() {
            return Err(MediaError::engine(message));
        }
        inner.starts += 1;
        Ok(())
    }

    async fn stop(&mut self) -> Result<()> {
        self.inner.lock().unwrap().stops += 1;
        Ok(())
    }

    fn volume(&self, stream: StreamType) -> Result<u8> {
        self.inner
            .lock()
            .unwrap()
            .volumes
            .get(&stream)
            .copied()
            .ok_or_else(|| MediaError::mixer(format!("no such stream: {}", stream.name())))
    }

    fn set_volume(&mut self, stream: StreamType, volume: u8) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.volumes.insert(stream, volume);
        inner.volume_updates.push((stream, volume));
        Ok(())
    }
}

/// Handle for inspecting and scripting a [`MockEngine`].
#[derive(Debug, Clone)]
pub struct MockEngineHandle {
    inner: Arc<Mutex<Inner>>,
}

impl MockEngineHandle {
    /// Files passed to `load` so far.
    pub fn loaded(&self) -> Vec<PathBuf> {
        self.inner.lock().unwrap().loaded.clone()
    }

    /// Every `prepare` call recorded so far.
    pub fn prepared(&self) -> Vec<PreparedPlayback> {
        self.inner.lock().unwrap().prepared.clone()
    }

    /// Number of `start` calls.
    pub fn starts(&self) -> u32 {
        self.inner.lock().unwrap().starts
    }

    /// Number of `stop` calls.
    pub fn stops(&self) -> u32 {
        self.inner.lock().unwrap().stops
    }

    /// Mixer updates in call order.
    pub fn volume_updates(&self) -> Vec<(StreamType, u8)> {
        self.inner.lock().unwrap().volume_updates.clone()
    }

    /// Make the next `load` call fail with `message`.
    pub fn fail_next_load(&self, message: impl Into<String>) {
        self.inner.lock().unwrap().fail_load = Some(message.into());
    }

    /// Make the next `prepare` call fail with `message`.
    pub fn fail_next_prepare(&self, message: impl Into<String>) {
        self.inner.lock().unwrap().fail_prepare = Some(message.into());
    }

    /// Make the next `start` call fail with `message`.
    pub fn fail_next_start(&self, message: impl Into<String>) {
        self.inner.lock().unwrap().fail_start = Some(message.into());
    }
}
