//! Build-time configuration of the hooks layer.

use payloads::{APIClient, ClientError};
use std::time::Duration;

/// Backend used when `BACKEND_URL` is not set at build time.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Every request gives up after this long. Not retried.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(2000);

/// Minimum spacing between two fetches of the same hook.
pub const POLL_DEBOUNCE: Duration = Duration::from_millis(500);

/// Cadence of the re-render tick that re-evaluates polling hooks.
pub const POLL_TICK_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub backend_url: String,
    pub request_timeout: Duration,
    pub poll_debounce: Duration,
    pub poll_tick_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: REQUEST_TIMEOUT,
            poll_debounce: POLL_DEBOUNCE,
            poll_tick_ms: POLL_TICK_MS,
        }
    }
}

impl Config {
    /// Read `BACKEND_URL` (set at build time), keeping the defaults for
    /// everything else.
    pub fn from_env() -> Self {
        let backend_url = option_env!("BACKEND_URL")
            .map(|url| url.to_string())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        Self {
            backend_url,
            ..Self::default()
        }
    }

    pub fn api_client(&self) -> Result<APIClient, ClientError> {
        APIClient::new(self.backend_url.clone(), self.request_timeout)
    }
}
