//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;
use validator::Validate;

fn default_page_size() -> usize {
    10
}

fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Settings for the portal server and its backend connection.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Base URL of the vocabulary backend, e.g. `http://localhost:8080/api`.
    #[validate(url)]
    pub api_base_url: String,
    /// Fixed page size of the backend, also used to slice local lists.
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100))]
    pub page_size: usize,
    pub templates_dir: String,
    /// Signing key for flash message cookies.
    #[validate(length(min = 64))]
    pub secret: String,
    #[serde(default = "default_request_timeout_secs")]
    #[validate(range(min = 1))]
    pub request_timeout_secs: u64,
    /// Lifetime of cached pages; `0` keeps them until a mutation.
    #[serde(default)]
    pub cache_ttl_secs: u64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn cache_ttl(&self) -> Option<Duration> {
        (self.cache_ttl_secs > 0).then(|| Duration::from_secs(self.cache_ttl_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ServerConfig {
        ServerConfig {
            address: "127.0.0.1".to_string(),
            port: 8080,
            api_base_url: "http://localhost:8081/api".to_string(),
            page_size: 10,
            templates_dir: "templates/**/*".to_string(),
            secret: "x".repeat(64),
            request_timeout_secs: 10,
            cache_ttl_secs: 0,
        }
    }

    #[test]
    fn accepts_valid_config() {
        assert!(config().validate().is_ok());
        assert_eq!(config().cache_ttl(), None);
    }

    #[test]
    fn rejects_bad_values() {
        let mut bad = config();
        bad.api_base_url = "not a url".to_string();
        assert!(bad.validate().is_err());

        let mut bad = config();
        bad.page_size = 0;
        assert!(bad.validate().is_err());

        let mut bad = config();
        bad.secret = "short".to_string();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn positive_ttl_enables_expiry() {
        let mut with_ttl = config();
        with_ttl.cache_ttl_secs = 30;
        assert_eq!(with_ttl.cache_ttl(), Some(Duration::from_secs(30)));
    }
}
