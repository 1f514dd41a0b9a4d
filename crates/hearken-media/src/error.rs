//! Error types for playback operations.

/// Result type alias for playback operations.
pub type Result<T> = std::result::Result<T, MediaError>;

/// Errors that can occur while driving the playback engine.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// The player has not been initialized yet.
    #[error("Player not ready: {message}")]
    NotReady { message: String },

    /// The file is not playable WAV audio.
    #[error("Unsupported media {path}: {message}")]
    Unsupported { path: String, message: String },

    /// The native engine rejected an operation.
    #[error("Engine error: {message}")]
    Engine { message: String },

    /// Mixer query or update failed.
    #[error("Mixer error: {message}")]
    Mixer { message: String },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MediaError {
    /// Create a new not-ready error.
    pub fn not_ready(message: impl Into<String>) -> Self {
        Self::NotReady {
            message: message.into(),
        }
    }

    /// Create a new unsupported-media error.
    pub fn unsupported(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unsupported {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new engine error.
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine {
            message: message.into(),
        }
    }

    /// Create a new mixer error.
    pub fn mixer(message: impl Into<String>) -> Self {
        Self::Mixer {
            message: message.into(),
        }
    }
}
