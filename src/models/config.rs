//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Largest page size the platform accepts for a single search call.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Root application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Secret store entry holding the API key
    #[serde(default = "defaults::secret_name")]
    pub secret_name: String,

    /// Region of the secret store
    #[serde(default = "defaults::region")]
    pub region: String,

    /// Base URL of the video platform API (no trailing slash needed)
    #[serde(default = "defaults::api_base_url")]
    pub api_base_url: String,

    /// Number of videos requested from the search stage
    #[serde(default = "defaults::max_results")]
    pub max_results: u32,

    /// Search text used when the caller omits `q`
    #[serde(default = "defaults::default_query")]
    pub default_query: String,

    /// Recency window used when the caller omits `days`
    #[serde(default = "defaults::default_days")]
    pub default_days: u32,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::config(format!("cannot read config file: {e}")))?;
        toml::from_str(&content).map_err(|e| AppError::config(e.to_string()))
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.secret_name.trim().is_empty() {
            return Err(AppError::config("secret_name is empty"));
        }
        if self.region.trim().is_empty() {
            return Err(AppError::config("region is empty"));
        }
        url::Url::parse(&self.api_base_url)
            .map_err(|e| AppError::config(format!("api_base_url is invalid: {e}")))?;
        if self.max_results == 0 || self.max_results > MAX_PAGE_SIZE {
            return Err(AppError::config(format!(
                "max_results must be within 1..={MAX_PAGE_SIZE}"
            )));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::config("http.timeout_secs must be > 0"));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::config("http.user_agent is empty"));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            secret_name: defaults::secret_name(),
            region: defaults::region(),
            api_base_url: defaults::api_base_url(),
            max_results: defaults::max_results(),
            default_query: defaults::default_query(),
            default_days: defaults::default_days(),
            http: HttpConfig::default(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

mod defaults {
    pub fn secret_name() -> String {
        "youtube/api/key".into()
    }
    pub fn region() -> String {
        "us-east-1".into()
    }
    pub fn api_base_url() -> String {
        "https://www.googleapis.com/youtube/v3".into()
    }
    pub fn max_results() -> u32 {
        5
    }
    pub fn default_query() -> String {
        "genAI".into()
    }
    pub fn default_days() -> u32 {
        7
    }
    pub fn user_agent() -> String {
        concat!("video-search/", env!("CARGO_PKG_VERSION")).into()
    }
    pub fn timeout() -> u64 {
        10
    }
}
