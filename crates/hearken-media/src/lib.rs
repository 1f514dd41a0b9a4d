//! WAV playback wrapper for the platform's native audio engine.
//!
//! The native engine exposes a bare prepare/start/stop surface; this
//! crate wraps it with asset preloading, WAV probing, stream routing,
//! and the mixer bookkeeping playback needs. The engine itself sits
//! behind the [`AudioEngine`] trait so tests and development hosts run
//! against [`MockEngine`] instead of real hardware.

pub mod engine;
pub mod error;
pub mod mock;
pub mod sounder;

pub use engine::{AudioEngine, StreamType};
pub use error::{MediaError, Result};
pub use mock::{MockEngine, MockEngineHandle, PreparedPlayback};
pub use sounder::Sounder;
