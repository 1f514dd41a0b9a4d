//! Signed HTTP event reporter for the voice platform cloud.
//!
//! Skills running on the device report TTS and media lifecycle events to
//! the cloud dispatch endpoint. Every request carries a signed auth
//! header derived from the device's provisioning profile; responses may
//! carry a follow-up action document for the caller.
//!
//! The reporter is stateless glue: one [`EventReporter`] per owner, no
//! retry, no backoff — a failed upload is the caller's signal.

pub mod auth;
pub mod config;
pub mod reporter;

pub use config::ReporterConfig;
pub use reporter::EventReporter;

/// Result type alias for reporter operations.
pub type Result<T> = std::result::Result<T, ReporterError>;

/// Errors that can occur while reporting events.
#[derive(Debug, thiserror::Error)]
pub enum ReporterError {
    /// The provisioning profile could not be loaded.
    #[error("Profile error: {0}")]
    Profile(String),

    /// The request never completed.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Upload failed with status {status}: {body}")]
    UploadFailed { status: u16, body: String },

    /// The endpoint answered 200 with a body that is not valid JSON.
    #[error("Invalid response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
