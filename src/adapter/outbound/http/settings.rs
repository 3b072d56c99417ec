//! Settings for the bets service HTTP adapter.

use serde::Deserialize;

/// Where the bets service lives.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetConfig {
    /// Collection URL; items live at `{base_url}/{betId}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3000/bets".into()
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// HTTP client tuning. Zero leaves the transport default in place.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default)]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default)]
    pub connect_timeout_ms: u64,
}
