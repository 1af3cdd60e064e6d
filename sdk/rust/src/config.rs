//! Client configuration.

use std::fmt;
use std::time::Duration;

/// Endpoint for general API operations.
pub const API_URL: &str = "https://api.monday.com/v2";

/// Endpoint for file-bearing operations.
pub const FILE_URL: &str = "https://api.monday.com/v2/file";

/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "MONDAY_API_KEY";
/// Environment variable holding the API version.
pub const API_VERSION_VAR: &str = "MONDAY_API_VERSION";
/// Environment variable overriding [`API_URL`].
pub const API_URL_VAR: &str = "MONDAY_API_URL";
/// Environment variable overriding [`FILE_URL`].
pub const FILE_URL_VAR: &str = "MONDAY_FILE_URL";

/// Client configuration.
///
/// Set once when a client is built and never mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Endpoint for general operations.
    pub api_url: String,
    /// Endpoint for file uploads.
    pub file_url: String,
    /// API key, sent verbatim as the `Authorization` header.
    pub api_key: Option<String>,
    /// API version, sent as the `API-Version` header.
    pub api_version: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            file_url: FILE_URL.to_string(),
            api_key: None,
            api_version: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("file_url", &self.file_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Creates a config with an API key and the default endpoints.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Reads the config from `MONDAY_*` environment variables.
    ///
    /// Unset or empty variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from a variable lookup function.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_url: read(API_URL_VAR).unwrap_or(defaults.api_url),
            file_url: read(FILE_URL_VAR).unwrap_or(defaults.file_url),
            api_key: read(API_KEY_VAR),
            api_version: read(API_VERSION_VAR),
            timeout: defaults.timeout,
        }
    }

    /// Sets the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the API version.
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Sets the general endpoint.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Sets the file upload endpoint.
    pub fn file_url(mut self, url: impl Into<String>) -> Self {
        self.file_url = url.into();
        self
    }

    /// Sets the timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_client_config() {
        let config = ClientConfig::new("secret")
            .api_version("2024-01")
            .timeout(Duration::from_secs(10));

        assert_eq!(config.api_url, API_URL);
        assert_eq!(config.file_url, FILE_URL);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.api_version.as_deref(), Some("2024-01"));
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_default_timeout() {
        assert_eq!(ClientConfig::default().timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (API_KEY_VAR, "env-key"),
            (API_VERSION_VAR, "2023-10"),
            (API_URL_VAR, "http://localhost:9000/v2"),
            (FILE_URL_VAR, "  "),
        ]);
        let config = ClientConfig::from_lookup(|name| vars.get(name).map(ToString::to_string));

        assert_eq!(config.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.api_version.as_deref(), Some("2023-10"));
        assert_eq!(config.api_url, "http://localhost:9000/v2");
        assert_eq!(config.file_url, FILE_URL);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let rendered = format!("{:?}", ClientConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
