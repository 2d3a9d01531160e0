/// HTTP client for the hosted edge-config service that stores small
/// key-value customization blobs (currently only the social-preview
/// configuration).
///
/// The service is an external collaborator and can be slow or down;
/// requests carry a timeout and transient failures are retried with
/// exponential backoff. Callers are expected to degrade to built-in
/// defaults when a read ultimately fails.
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::warn;

#[derive(Clone, Debug)]
pub struct EdgeConfigClientConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub default_timeout: Duration,
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    pub max_error_body_bytes: usize,
}

impl EdgeConfigClientConfig {
    /// Load from environment variables. Returns `None` when
    /// `EDGE_CONFIG_URL` is unset, which disables the upstream entirely.
    ///
    /// Optional tuning:
    /// - `EDGE_CONFIG_TOKEN`: bearer token for the upstream
    /// - `EDGE_CONFIG_TIMEOUT_SECS` (default 10)
    /// - `EDGE_CONFIG_MAX_RETRIES` (default 2)
    /// - `EDGE_CONFIG_RETRY_INITIAL_MS` (default 200)
    /// - `EDGE_CONFIG_RETRY_MAX_MS` (default 2000)
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("EDGE_CONFIG_URL").ok()?;

        let default_timeout = std::env::var("EDGE_CONFIG_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(10));

        let max_retries = std::env::var("EDGE_CONFIG_MAX_RETRIES")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(2);

        let initial_backoff = std::env::var("EDGE_CONFIG_RETRY_INITIAL_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or_else(|| Duration::from_millis(200));

        let max_backoff = std::env::var("EDGE_CONFIG_RETRY_MAX_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or_else(|| Duration::from_millis(2_000));

        Some(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: std::env::var("EDGE_CONFIG_TOKEN").ok(),
            default_timeout,
            max_retries,
            initial_backoff,
            max_backoff,
            max_error_body_bytes: 8 * 1024,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EdgeConfigError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid response JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("upstream returned error: status={status} message={message}")]
    Upstream { status: StatusCode, message: String },

    #[error("upstream returned non-JSON error: status={status} body={body}")]
    UpstreamBody { status: StatusCode, body: String },
}

#[derive(Clone)]
pub struct EdgeConfigClient {
    config: EdgeConfigClientConfig,
    http: reqwest::Client,
}

impl EdgeConfigClient {
    pub fn new(config: EdgeConfigClientConfig) -> Result<Self, EdgeConfigError> {
        let http = reqwest::Client::builder()
            .user_agent("thesage/site-api")
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &EdgeConfigClientConfig {
        &self.config
    }

    /// Fetch a single item by key. A missing key is `Ok(None)`, not an
    /// error; everything else non-success is an upstream failure.
    pub async fn get_item(&self, key: &str) -> Result<Option<serde_json::Value>, EdgeConfigError> {
        let url = format!("{}/item/{key}", self.config.base_url);
        self.request_with_retry(|| async {
            let mut req = self.http.get(&url).timeout(self.config.default_timeout);
            if let Some(token) = &self.config.token {
                req = req.bearer_auth(token);
            }
            let resp = req.send().await?;

            if resp.status() == StatusCode::NOT_FOUND {
                return Ok(None);
            }
            if resp.status().is_success() {
                let value = resp.json::<serde_json::Value>().await?;
                return Ok(Some(value));
            }
            Err(Self::to_upstream_error(resp, self.config.max_error_body_bytes).await)
        })
        .await
    }

    /// Write a single item. The upstream replaces the value atomically;
    /// there is no partial-update semantics to preserve.
    pub async fn put_item(
        &self,
        key: &str,
        value: &serde_json::Value,
    ) -> Result<(), EdgeConfigError> {
        let url = format!("{}/item/{key}", self.config.base_url);
        self.request_with_retry(|| {
            let value = value.clone();
            let url = url.clone();
            async move {
                let mut req = self
                    .http
                    .put(&url)
                    .timeout(self.config.default_timeout)
                    .json(&value);
                if let Some(token) = &self.config.token {
                    req = req.bearer_auth(token);
                }
                let resp = req.send().await?;

                if resp.status().is_success() {
                    return Ok(());
                }
                Err(Self::to_upstream_error(resp, self.config.max_error_body_bytes).await)
            }
        })
        .await
    }

    async fn to_upstream_error(resp: reqwest::Response, max_error_body_bytes: usize) -> EdgeConfigError {
        let status = resp.status();
        let body = read_limited_text(resp, max_error_body_bytes).await;
        if let Ok(parsed) = serde_json::from_str::<ErrorEnvelope>(&body) {
            return EdgeConfigError::Upstream {
                status,
                message: parsed
                    .error
                    .unwrap_or_else(|| "unknown upstream error".to_string()),
            };
        }
        EdgeConfigError::UpstreamBody { status, body }
    }

    async fn request_with_retry<T, Fut, F>(&self, mut f: F) -> Result<T, EdgeConfigError>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, EdgeConfigError>>,
    {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            match f().await {
                Ok(v) => return Ok(v),
                Err(e) => {
                    if attempt > self.config.max_retries || !should_retry(&e) {
                        return Err(e);
                    }
                    let delay = backoff_delay(
                        self.config.initial_backoff,
                        self.config.max_backoff,
                        attempt - 1,
                    );
                    warn!(
                        attempt,
                        delay_ms = delay.as_millis(),
                        error = %e,
                        "edge-config request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

fn should_retry(err: &EdgeConfigError) -> bool {
    match err {
        EdgeConfigError::Request(e) => e.is_timeout() || e.is_connect() || e.is_request(),
        EdgeConfigError::Upstream { status, .. } | EdgeConfigError::UpstreamBody { status, .. } => {
            *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
        }
        EdgeConfigError::InvalidJson(_) => false,
    }
}

fn backoff_delay(initial: Duration, max: Duration, exponent: u32) -> Duration {
    let mult = 1u128.checked_shl(exponent).unwrap_or(u128::MAX);
    let base_ms = initial.as_millis().saturating_mul(mult);
    let capped_ms = std::cmp::min(base_ms, max.as_millis()) as u64;
    let jitter_cap = std::cmp::max(1, capped_ms / 4);
    Duration::from_millis(capped_ms.saturating_add(pseudo_jitter_ms(jitter_cap)))
}

fn pseudo_jitter_ms(max_inclusive: u64) -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| Duration::from_secs(0));
    (now.subsec_nanos() as u64) % (max_inclusive + 1)
}

async fn read_limited_text(resp: reqwest::Response, max_bytes: usize) -> String {
    match resp.bytes().await {
        Ok(mut b) => {
            if b.len() > max_bytes {
                b.truncate(max_bytes);
            }
            String::from_utf8_lossy(&b).to_string()
        }
        Err(e) => {
            warn!(error = %e, "failed to read upstream error body");
            "<failed to read error body>".to_string()
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_grows_and_caps() {
        let initial = Duration::from_millis(200);
        let max = Duration::from_millis(2_000);
        let d0 = backoff_delay(initial, max, 0);
        let d3 = backoff_delay(initial, max, 3);
        assert!(d0 >= Duration::from_millis(200));
        // 200ms * 2^3 = 1600ms, plus at most 25% jitter
        assert!(d3 <= Duration::from_millis(2_000 + 500));
    }

    #[test]
    fn client_errors_are_not_retried() {
        let err = EdgeConfigError::Upstream {
            status: StatusCode::BAD_REQUEST,
            message: "bad key".to_string(),
        };
        assert!(!should_retry(&err));

        let err = EdgeConfigError::Upstream {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "boom".to_string(),
        };
        assert!(should_retry(&err));
    }
}
