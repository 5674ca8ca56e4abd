//! Client for the remote traffic-light actuator.
//!
//! The actuator exposes one `GET` endpoint per turning movement. Any response
//! body is ignored; only transport success and the HTTP status matter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::CommandKey;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

pub use reqwest::StatusCode;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("invalid actuator url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("actuator url '{url}' must use http or https, not '{scheme}'")]
    UnsupportedScheme { url: String, scheme: String },
    #[error("failed to build actuator http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("actuator request to {url} failed: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },
    #[error("actuator at {url} answered {status}")]
    Status { url: String, status: StatusCode },
}

impl DeliveryError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, DeliveryError::Transport { source, .. } if source.is_timeout())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub key: CommandKey,
    pub url: String,
    /// `None` when nothing was sent (dry run).
    pub status: Option<u16>,
}

#[async_trait]
pub trait Actuator: Send + Sync {
    async fn trigger(&self, key: CommandKey) -> Result<DeliveryReceipt, DeliveryError>;

    /// Short human description for startup logs.
    fn describe(&self) -> String;
}

pub struct HttpActuator {
    client: Client,
    base_url: String,
}

impl HttpActuator {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DeliveryError> {
        let base_url = normalize_base_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(DeliveryError::Client)?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, key: CommandKey) -> String {
        format!("{}{}", self.base_url, key.endpoint_path())
    }
}

#[async_trait]
impl Actuator for HttpActuator {
    async fn trigger(&self, key: CommandKey) -> Result<DeliveryReceipt, DeliveryError> {
        let url = self.endpoint_url(key);
        let parsed = Url::parse(&url).map_err(|source| DeliveryError::InvalidUrl {
            url: url.clone(),
            source,
        })?;

        debug!(%key, %url, "sending actuator request");
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|source| DeliveryError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Status { url, status });
        }

        Ok(DeliveryReceipt {
            key,
            url,
            status: Some(status.as_u16()),
        })
    }

    fn describe(&self) -> String {
        format!("http actuator at {}", self.base_url)
    }
}

/// Logs each command instead of contacting hardware.
pub struct DryRunActuator {
    base_url: String,
}

impl DryRunActuator {
    pub fn new(base_url: Option<&str>) -> Self {
        Self {
            base_url: base_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl Actuator for DryRunActuator {
    async fn trigger(&self, key: CommandKey) -> Result<DeliveryReceipt, DeliveryError> {
        let url = format!("{}{}", self.base_url, key.endpoint_path());
        info!(%key, %url, "dry run: actuator request not sent");
        Ok(DeliveryReceipt {
            key,
            url,
            status: None,
        })
    }

    fn describe(&self) -> String {
        "dry-run actuator (no requests sent)".to_string()
    }
}

/// Validates an `http(s)` base URL and strips trailing slashes so endpoint
/// paths can be appended verbatim.
pub fn normalize_base_url(raw: &str) -> Result<String, DeliveryError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|source| DeliveryError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(DeliveryError::UnsupportedScheme {
            url: raw.to_string(),
            scheme: parsed.scheme().to_string(),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
