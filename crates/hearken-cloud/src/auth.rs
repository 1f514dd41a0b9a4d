//! Request signing.
//!
//! Every dispatch request carries an `Authorization` header listing the
//! auth fields plus an HMAC-SHA256 signature over their canonical query
//! string, keyed by the device secret. The header layout and field order
//! are fixed by the endpoint; do not reorder.

use crate::config::ReporterConfig;
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Service slot the signature covers; this reporter only speaks REST.
const SERVICE: &str = "rest";

type HmacSha256 = Hmac<Sha256>;

/// Canonical query string the signature is computed over.
///
/// Field order matters: the endpoint recomputes the signature over the
/// same ordering.
fn canonical_query(config: &ReporterConfig, time: i64) -> String {
    format!(
        "key={}&device_type_id={}&device_id={}&service={}&version={}&time={}",
        config.key, config.device_type_id, config.device_id, SERVICE, config.api_version, time
    )
}

/// Uppercase hex HMAC-SHA256 signature for the auth fields at `time`.
pub fn sign(config: &ReporterConfig, time: i64) -> String {
    let mut mac = HmacSha256::new_from_slice(config.secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(canonical_query(config, time).as_bytes());
    mac.finalize()
        .into_bytes()
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect()
}

/// The full `Authorization` header value for a request at `time`.
pub fn auth_header(config: &ReporterConfig, time: i64) -> String {
    [
        format!("version={}", config.api_version),
        format!("time={}", time),
        format!("sign={}", sign(config, time)),
        format!("key={}", config.key),
        format!("device_type_id={}", config.device_type_id),
        format!("device_id={}", config.device_id),
        format!("service={}", SERVICE),
    ]
    .join(";")
}
