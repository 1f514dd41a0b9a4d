//! Native playback engine abstraction.
//!
//! The platform ships an opaque native WAV player; this trait is its
//! surface. All trait methods use native `async fn` (RPITIT), so
//! implementations are used through generics rather than trait objects.

#![allow(async_fn_in_trait)]

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Audio stream a playback is routed to.
///
/// Each stream carries its own mixer volume; the stream name is the
/// identifier the native engine expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StreamType {
    /// System feedback sounds (default).
    #[default]
    System,
    /// Regular media playback.
    Playback,
    /// Synthesized speech.
    Tts,
    /// Alarm and timer sounds.
    Alarm,
    /// Notification chimes.
    Notification,
}

impl StreamType {
    /// The stream identifier the native engine expects.
    pub fn name(&self) -> &'static str {
        match self {
            StreamType::System => "system",
            StreamType::Playback => "playback",
            StreamType::Tts => "tts",
            StreamType::Alarm => "alarm",
            StreamType::Notification => "notification",
        }
    }
}

/// The native WAV playback engine surface.
///
/// One engine drives one player connection: `prepare` binds a file and a
/// stream to the connection, `start` begins the actual playback, `stop`
/// aborts it. Mixer access is exposed alongside because re-binding a
/// connection resets the stream volume (see
/// [`Sounder::play`](crate::Sounder::play)).
pub trait AudioEngine: Send + Sync {
    /// Preload the given files into the engine's cache.
    ///
    /// # Errors
    ///
    /// Returns an error if any file cannot be loaded.
    async fn load(&mut self, paths: &[PathBuf]) -> Result<()>;

    /// Bind `path` to the player connection, routed to `stream`.
    ///
    /// With `hold_connection` the existing connection is reused instead
    /// of being torn down and re-created.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the file or the stream.
    async fn prepare(&mut self, path: &Path, stream: &str, hold_connection: bool) -> Result<()>;

    /// Start the prepared playback.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is prepared or the engine fails.
    async fn start(&mut self) -> Result<()>;

    /// Stop the current playback.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails to stop.
    async fn stop(&mut self) -> Result<()>;

    /// Current mixer volume for `stream` (0-100).
    ///
    /// # Errors
    ///
    /// Returns an error if the mixer cannot be queried.
    fn volume(&self, stream: StreamType) -> Result<u8>;

    /// Set the mixer volume for `stream` (0-100).
    ///
    /// # Errors
    ///
    /// Returns an error if the mixer rejects the update.
    fn set_volume(&mut self, stream: StreamType, volume: u8) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_names() {
        assert_eq!(StreamType::System.name(), "system");
        assert_eq!(StreamType::Playback.name(), "playback");
        assert_eq!(StreamType::Tts.name(), "tts");
        assert_eq!(StreamType::Alarm.name(), "alarm");
        assert_eq!(StreamType::Notification.name(), "notification");
    }

    #[test]
    fn test_default_stream_is_system() {
        assert_eq!(StreamType::default(), StreamType::System);
    }
}
