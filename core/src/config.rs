//! Client configuration: base address and request timeout.

use std::time::Duration;

/// Fallback base address used when no override is supplied.
pub const DEFAULT_BASE_URL: &str = "https://blogginapptest.ddns.net/";

/// Environment variable overriding the base address.
pub const BASE_URL_ENV_VAR: &str = "BLOG_API_BASE_URL";

/// Fixed request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Settings fixed at client construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Config for an explicit base address with the standard timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl Default for ClientConfig {
    /// Resolves the base address from the environment, falling back to
    /// [`DEFAULT_BASE_URL`].
    fn default() -> Self {
        Self::with_base_url(base_url_from_env())
    }
}

/// Get the base address, checking the environment variable first, then
/// falling back to the default.
pub fn base_url_from_env() -> String {
    resolve_base_url(
        std::env::var_os(BASE_URL_ENV_VAR).and_then(|value| value.into_string().ok()),
    )
}

fn resolve_base_url(configured: Option<String>) -> String {
    configured
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
