//! Device provisioning profile.

use crate::{ReporterError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Credentials and addressing for the cloud dispatch endpoint.
///
/// Field names match the device's provisioning profile JSON
/// (`openvoice_profile.json`), written at activation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReporterConfig {
    /// Host the event dispatch endpoint lives on.
    pub event_req_host: String,

    /// Device key issued at activation.
    pub key: String,

    /// Device secret issued at activation; used only as the signing key,
    /// never sent on the wire.
    pub secret: String,

    /// Hardware type identifier.
    pub device_type_id: String,

    /// Unique device identifier.
    pub device_id: String,

    /// API version string the signature covers.
    pub api_version: String,
}

impl ReporterConfig {
    /// Load a profile from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// profile document.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| ReporterError::Profile(format!("{}: {e}", path.display())))
    }
}
