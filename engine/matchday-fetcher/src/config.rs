use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{API_FOOTBALL_BASE_URL, API_FOOTBALL_HOST, API_KEY_ENV};

/// Configuration for the Matchday Fetcher
#[derive(Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// API-Football configuration
    pub api_football: ApiFootballConfig,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ApiFootballConfig {
    /// Base URL the `/fixtures` path is appended to
    pub base_url: String,

    /// Value sent in the `X-RapidAPI-Host` header
    pub api_host: String,

    /// RapidAPI key, sent in the `X-RapidAPI-Key` header
    pub api_key: Option<String>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            api_football: ApiFootballConfig {
                base_url: API_FOOTBALL_BASE_URL.to_string(),
                api_host: API_FOOTBALL_HOST.to_string(),
                api_key: None,
            },
        }
    }
}

impl FetcherConfig {
    /// Build a config around an explicit API key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.api_football.api_key = Some(api_key.into());
        config
    }

    /// Load configuration from environment variables.
    ///
    /// Only `RAPID_API_KEY` is read. A missing key is not an error here; the
    /// fetch reports it when it runs.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        match std::env::var(API_KEY_ENV) {
            Ok(api_key) if !api_key.trim().is_empty() => {
                config.api_football.api_key = Some(api_key.trim().to_string());
            }
            _ => warn!("{} is not set, fixture requests will be rejected", API_KEY_ENV),
        }

        config
    }

    /// Full URL of the fixtures endpoint
    pub fn fixtures_url(&self) -> String {
        format!("{}/fixtures", self.api_football.base_url.trim_end_matches('/'))
    }

    /// API key, if one is configured and non-empty
    pub fn api_key(&self) -> Option<&str> {
        self.api_football
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
    }
}

// Keeps the key out of startup logs.
impl std::fmt::Debug for FetcherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetcherConfig")
            .field("base_url", &self.api_football.base_url)
            .field("api_host", &self.api_football.api_host)
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_rapidapi() {
        let config = FetcherConfig::default();
        assert_eq!(config.api_football.base_url, API_FOOTBALL_BASE_URL);
        assert_eq!(config.api_football.api_host, "api-football-v1.p.rapidapi.com");
        assert!(config.api_key().is_none());
        assert_eq!(
            config.fixtures_url(),
            "https://api-football-v1.p.rapidapi.com/v3/fixtures"
        );
    }

    #[test]
    fn test_fixtures_url_tolerates_trailing_slash() {
        let mut config = FetcherConfig::with_api_key("key");
        config.api_football.base_url = "http://127.0.0.1:8080/v3/".to_string();
        assert_eq!(config.fixtures_url(), "http://127.0.0.1:8080/v3/fixtures");
    }

    #[test]
    fn test_empty_key_counts_as_missing() {
        let config = FetcherConfig::with_api_key("");
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = FetcherConfig::with_api_key("super-secret");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
