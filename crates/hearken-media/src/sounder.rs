//! WAV playback wrapper.

use crate::engine::{AudioEngine, StreamType};
use crate::error::{MediaError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Thin WAV player over a native [`AudioEngine`].
///
/// Only WAV audio is supported: files are probed before they reach the
/// engine, so a bad asset path fails with a useful error rather than a
/// native one. The engine handle is owned by this instance; there is no
/// process-wide player.
///
/// # Example
///
/// ```no_run
/// use hearken_media::{MockEngine, Sounder, StreamType};
/// use std::path::PathBuf;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> hearken_media::Result<()> {
/// let (engine, _handle) = MockEngine::new();
/// let mut sounder = Sounder::new(engine);
///
/// sounder.init(&[PathBuf::from("/opt/media/wakeup.wav")]).await?;
/// sounder.play("/opt/media/wakeup.wav", Some(StreamType::System), false).await?;
/// sounder.stop().await?;
/// # Ok(())
/// # }
/// ```
pub struct Sounder<E: AudioEngine> {
    engine: E,
    ready: bool,
}

impl<E: AudioEngine> Sounder<E> {
    /// Wrap a playback engine. The player is not ready until
    /// [`init`](Sounder::init) succeeds.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            ready: false,
        }
    }

    /// Preload the given WAV files and mark the player ready.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails to load any file; the player
    /// stays unready.
    pub async fn init(&mut self, paths: &[PathBuf]) -> Result<()> {
        debug!(count = paths.len(), "preloading sound assets");
        self.engine.load(paths).await?;
        self.ready = true;
        Ok(())
    }

    /// Whether [`init`](Sounder::init) has completed.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Play a WAV file on the given stream.
    ///
    /// `stream` defaults to [`StreamType::System`]. When
    /// `hold_connection` is false the engine re-creates its player
    /// connection, which resets the stream volume to the mixer default;
    /// the current volume is re-applied afterwards to compensate.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not ready, the file is not WAV
    /// audio, or the engine rejects the playback.
    pub async fn play(
        &mut self,
        path: impl AsRef<Path>,
        stream: Option<StreamType>,
        hold_connection: bool,
    ) -> Result<()> {
        if !self.ready {
            return Err(MediaError::not_ready("init() has not completed"));
        }

        let path = path.as_ref();
        probe_wav(path)?;

        let stream = stream.unwrap_or_default();
        debug!(path = %path.display(), stream = stream.name(), hold_connection, "play");

        self.engine
            .prepare(path, stream.name(), hold_connection)
            .await?;

        if !hold_connection {
            // A fresh connection comes up at the mixer default; re-assert
            // the stream's current volume before starting.
            match self.engine.volume(stream) {
                Ok(volume) => self.engine.set_volume(stream, volume)?,
                Err(e) => warn!(error = %e, "skipping volume refresh"),
            }
        }

        self.engine.start().await
    }

    /// Stop the current playback.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not ready or the engine fails.
    pub async fn stop(&mut self) -> Result<()> {
        if !self.ready {
            return Err(MediaError::not_ready("init() has not completed"));
        }
        debug!("stop");
        self.engine.stop().await
    }
}

/// Reject files that are not readable WAV audio.
fn probe_wav(path: &Path) -> Result<()> {
    hound::WavReader::open(path)
        .map(drop)
        .map_err(|e| MediaError::unsupported(path.display().to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockEngine;
    use std::fs;

    fn write_test_wav(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 16000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for n in 0..160i16 {
            writer.write_sample(n.wrapping_mul(64)).unwrap();
        }
        writer.finalize().unwrap();
        path
    }

    #[tokio::test]
    async fn test_play_before_init_is_rejected() {
        let (engine, handle) = MockEngine::new();
        let mut sounder = Sounder::new(engine);

        let result = sounder.play("/opt/media/wakeup.wav", None, false).await;
        assert!(matches!(result, Err(MediaError::NotReady { .. })));
        assert_eq!(handle.prepared().len(), 0);
    }

    #[tokio::test]
    async fn test_play_routes_to_requested_stream() {
        let dir = tempfile::tempdir().unwrap();
        let wav = write_test_wav(dir.path(), "chime.wav");

        let (engine, handle) = MockEngine::new();
        let mut sounder = Sounder::new(engine);
        sounder.init(&[wav.clone()]).await.unwrap();

        sounder
            .play(&wav, Some(StreamType::Notification), true)
            .await
            .unwrap();

        let prepared = handle.prepared();
        assert_eq!(prepared.len(), 1);
        assert_eq!(prepared[0].path, wav);
        assert_eq!(prepared[0].stream, "notification");
        assert!(prepared[0].hold_connection);
        assert_eq!(handle.starts(), 1);
    }

    #[tokio::test]
    async fn test_play_defaults_to_system_stream() {
        let dir = tempfile::tempdir().unwrap();
        let wav = write_test_wav(dir.path(), "volume.wav");

        let (engine, handle) = MockEngine::new();
        let mut sounder = Sounder::new(engine);
        sounder.init(&[wav.clone()]).await.unwrap();

        sounder.play(&wav, None, false).await.unwrap();

        assert_eq!(handle.prepared()[0].stream, "system");
    }

    #[tokio::test]
    async fn test_volume_refreshed_unless_connection_held() {
        let dir = tempfile::tempdir().unwrap();
        let wav = write_test_wav(dir.path(), "wakeup.wav");

        let (engine, handle) = MockEngine::new();
        let mut sounder = Sounder::new(engine);
        sounder.init(&[wav.clone()]).await.unwrap();

        sounder.play(&wav, None, false).await.unwrap();
        assert_eq!(handle.volume_updates(), [(StreamType::System, 50)]);

        sounder.play(&wav, None, true).await.unwrap();
        assert_eq!(handle.volume_updates().len(), 1);
    }

    #[tokio::test]
    async fn test_non_wav_file_is_rejected_before_engine() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("tone.wav");
        fs::write(&bogus, b"ID3\x03mp3 data, not wav").unwrap();

        let (engine, handle) = MockEngine::new();
        let mut sounder = Sounder::new(engine);
        sounder.init(&[]).await.unwrap();

        let result = sounder.play(&bogus, None, false).await;
        assert!(matches!(result, Err(MediaError::Unsupported { .. })));
        assert_eq!(handle.prepared().len(), 0);
        assert_eq!(handle.starts(), 0);
    }

    #[tokio::test]
    async fn test_prepare_failure_skips_start() {
        let dir = tempfile::tempdir().unwrap();
        let wav = write_test_wav(dir.path(), "wakeup.wav");

        let (engine, handle) = MockEngine::new();
        let mut sounder = Sounder::new(engine);
        sounder.init(&[wav.clone()]).await.unwrap();

        handle.fail_next_prepare("connection lost");
        let result = sounder.play(&wav, None, false).await;

        assert!(matches!(result, Err(MediaError::Engine { .. })));
        assert_eq!(handle.starts(), 0);
    }

    #[tokio::test]
    async fn test_failed_init_keeps_player_unready() {
        let (engine, handle) = MockEngine::new();
        handle.fail_next_load("out of memory");

        let mut sounder = Sounder::new(engine);
        let result = sounder.init(&[PathBuf::from("/opt/media/wakeup.wav")]).await;

        assert!(result.is_err());
        assert!(!sounder.is_ready());
    }

    #[tokio::test]
    async fn test_stop_forwards_to_engine() {
        let (engine, handle) = MockEngine::new();
        let mut sounder = Sounder::new(engine);
        sounder.init(&[]).await.unwrap();

        sounder.stop().await.unwrap();
        assert_eq!(handle.stops(), 1);
    }
}
