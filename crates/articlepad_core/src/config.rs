//! Configuration loading from environment variables.

use crate::constants::{DEFAULT_API_BASE_URL, LISTING_ROUTE_PATH};
use serde::Deserialize;
use std::env;
use std::time::Duration;
use tracing::warn;

/// Runtime configuration for ArticlePad clients.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the article API, without a trailing slash.
    pub api_base_url: String,
    /// Username from the environment; persisted storage takes precedence in the GUI.
    pub username: Option<String>,
    /// Route the GUI opens on startup.
    pub initial_route: String,
    /// Optional per-request timeout. `None` means requests may wait forever.
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            username: None,
            initial_route: LISTING_ROUTE_PATH.to_string(),
            request_timeout_secs: None,
        }
    }
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

/// Trim a base URL and drop trailing slashes so path joins stay predictable.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads `ARTICLEPAD_API`, `ARTICLEPAD_USERNAME`, `ARTICLEPAD_ROUTE`, and
    /// `ARTICLEPAD_REQUEST_TIMEOUT_SECS`.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: non_empty_var("ARTICLEPAD_API")
                .map(|url| normalize_base_url(&url))
                .unwrap_or(defaults.api_base_url),
            username: non_empty_var("ARTICLEPAD_USERNAME"),
            initial_route: non_empty_var("ARTICLEPAD_ROUTE").unwrap_or(defaults.initial_route),
            request_timeout_secs: non_empty_var("ARTICLEPAD_REQUEST_TIMEOUT_SECS")
                .and_then(|secs| match secs.parse::<u64>() {
                    Ok(secs) => Some(secs),
                    Err(err) => {
                        warn!(
                            "ignoring ARTICLEPAD_REQUEST_TIMEOUT_SECS='{}': {}",
                            secs, err
                        );
                        None
                    }
                })
                .filter(|secs| *secs > 0),
        }
    }

    /// Request timeout as a [`Duration`], when one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
