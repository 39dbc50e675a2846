// src/config.rs

//! Configuration loading utilities.
//!
//! Configuration starts from an optional TOML file (or defaults) and is then
//! overridden by environment variables, which is how the Lambda deployment
//! is configured:
//!
//! - `YOUTUBE_API_SECRET_NAME`: secret holding the API key
//! - `AWS_REGION`: region of the secret store
//! - `YOUTUBE_API_BASE_URL`: platform API base URL
//! - `SEARCH_MAX_RESULTS`: page size of the search stage
//! - `SEARCH_DEFAULT_QUERY`: search text when `q` is absent
//! - `SEARCH_DEFAULT_DAYS`: recency window when `days` is absent
//! - `HTTP_TIMEOUT_SECS`: outbound request timeout
//! - `HTTP_USER_AGENT`: outbound User-Agent header

use std::path::Path;

use crate::error::Result;
use crate::models::AppConfig;

/// Load configuration from defaults plus the process environment.
pub fn load_from_env() -> Result<AppConfig> {
    let mut config = AppConfig::default();
    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    config.validate()?;
    Ok(config)
}

/// Load configuration from a TOML file (falling back to defaults), then apply
/// environment overrides.
pub fn load_with_file(path: &Path) -> Result<AppConfig> {
    let mut config = AppConfig::load_or_default(path);
    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    config.validate()?;
    Ok(config)
}

/// Override configuration values from a variable lookup.
///
/// Numeric values that fail to parse are ignored and the previous value kept.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(name) = lookup("YOUTUBE_API_SECRET_NAME") {
        config.secret_name = name;
    }

    if let Some(region) = lookup("AWS_REGION") {
        config.region = region;
    }

    if let Some(url) = lookup("YOUTUBE_API_BASE_URL") {
        config.api_base_url = url;
    }

    if let Some(max) = lookup("SEARCH_MAX_RESULTS") {
        if let Ok(n) = max.trim().parse() {
            config.max_results = n;
        }
    }

    if let Some(query) = lookup("SEARCH_DEFAULT_QUERY") {
        config.default_query = query;
    }

    if let Some(days) = lookup("SEARCH_DEFAULT_DAYS") {
        if let Ok(n) = days.trim().parse() {
            config.default_days = n;
        }
    }

    if let Some(timeout) = lookup("HTTP_TIMEOUT_SECS") {
        if let Ok(secs) = timeout.trim().parse() {
            config.http.timeout_secs = secs;
        }
    }

    if let Some(agent) = lookup("HTTP_USER_AGENT") {
        config.http.user_agent = agent;
    }
}
