//! Configuration for the Notespace API client.

/// Environment variable overriding the default base URL.
pub const BASE_URL_ENV: &str = "NOTESPACE_API_BASE_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:8070/api/v1";

/// Configuration for the Notespace API client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL up to and including the API version prefix.
    pub base_url: String,
    /// Request timeout in milliseconds; expiry surfaces as a network error.
    pub request_timeout_ms: u64,
    /// User agent sent on every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_ms: 10_000,
            user_agent: format!("notespace-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Default configuration with the base URL taken from
    /// [`BASE_URL_ENV`] when set.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = ClientConfig::default();
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                config.base_url = base_url;
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8070/api/v1");
        assert_eq!(config.request_timeout_ms, 10_000);
        assert!(config.user_agent.starts_with("notespace-client/"));
    }

    #[test]
    fn test_custom_config() {
        let config = ClientConfig {
            base_url: "https://api.example.net/api/v1".into(),
            request_timeout_ms: 2_000,
            user_agent: "tester".into(),
        };
        assert_eq!(config.base_url, "https://api.example.net/api/v1");
        assert_eq!(config.request_timeout_ms, 2_000);
        assert_eq!(config.user_agent, "tester");
    }
}
