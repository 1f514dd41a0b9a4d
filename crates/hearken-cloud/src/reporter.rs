//! The event reporter client.

use crate::auth::auth_header;
use crate::config::ReporterConfig;
use crate::{ReporterError, Result};
use chrono::Utc;
use serde_json::{Value, json};
use std::path::Path;
use tracing::{debug, error};

/// Path of the skill event dispatch endpoint.
const SEND_EVENT_PATH: &str = "/v1/skill/dispatch/sendEvent";

/// Stateless client for the cloud event dispatch endpoint.
///
/// Uploads skill events with a signed auth header and hands back the
/// `response` document the endpoint returns (the follow-up action for
/// the skill, if any). No retry or backoff: a failure is returned to the
/// caller as-is.
#[derive(Debug, Clone)]
pub struct EventReporter {
    config: ReporterConfig,
    base_url: String,
    client: reqwest::Client,
}

impl EventReporter {
    /// Create a reporter from a provisioning profile.
    pub fn new(config: ReporterConfig) -> Self {
        let base_url = format!("https://{}", config.event_req_host);
        Self {
            config,
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Create a reporter reading the profile from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be loaded.
    pub fn from_profile(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(ReporterConfig::from_file(path)?))
    }

    /// Create a reporter addressing `base_url` instead of the profile
    /// host. For gateways and test harnesses.
    pub fn with_base_url(config: ReporterConfig, base_url: impl Into<String>) -> Self {
        Self {
            config,
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Upload one skill event.
    ///
    /// `extra` is JSON-encoded into the `extra` string field the endpoint
    /// expects. Returns the endpoint's `response` document, or `Null`
    /// when it sends none.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the endpoint answers a
    /// non-success status, or the response body is not JSON.
    pub async fn send_event(&self, event: &str, app_id: &str, extra: &Value) -> Result<Value> {
        let body = json!({
            "event": event,
            "appId": app_id,
            "extra": extra.to_string(),
        });
        debug!(event, app_id, "uploading event");

        let response = self
            .client
            .post(format!("{}{}", self.base_url, SEND_EVENT_PATH))
            .header(
                reqwest::header::AUTHORIZATION,
                auth_header(&self.config, Utc::now().timestamp()),
            )
            .json(&body)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/json;charset=utf-8",
            )
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            error!(event, status = status.as_u16(), "event upload failed");
            return Err(ReporterError::UploadFailed {
                status: status.as_u16(),
                body: text,
            });
        }

        let mut document: Value = serde_json::from_str(&text)?;
        Ok(document
            .as_object_mut()
            .and_then(|obj| obj.remove("response"))
            .unwrap_or(Value::Null))
    }

    /// Report a TTS lifecycle event for a voice item.
    ///
    /// # Errors
    ///
    /// See [`send_event`](EventReporter::send_event).
    pub async fn tts_event(&self, name: &str, app_id: &str, item_id: &str) -> Result<Value> {
        self.send_event(name, app_id, &json!({"voice": {"itemId": item_id}}))
            .await
    }

    /// Report a media lifecycle event.
    ///
    /// # Errors
    ///
    /// See [`send_event`](EventReporter::send_event).
    pub async fn media_event(&self, name: &str, app_id: &str, extra: &Value) -> Result<Value> {
        self.send_event(name, app_id, &json!({"media": extra})).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ReporterConfig {
        ReporterConfig {
            event_req_host: "apigwrest.example.com".to_string(),
            key: "test-key".to_string(),
            secret: "test-secret".to_string(),
            device_type_id: "speaker-mk2".to_string(),
            device_id: "0123456789abcdef".to_string(),
            api_version: "1.0.0".to_string(),
        }
    }

    #[test]
    fn test_base_url_from_profile_host() {
        let reporter = EventReporter::new(test_config());
        assert_eq!(reporter.base_url, "https://apigwrest.example.com");
    }

    #[test]
    fn test_base_url_override() {
        let reporter = EventReporter::with_base_url(test_config(), "http://127.0.0.1:9099");
        assert_eq!(reporter.base_url, "http://127.0.0.1:9099");
    }
}
