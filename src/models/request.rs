//! Search request built from the caller's query parameters.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::error::{AppError, Result};
use crate::models::AppConfig;

/// Query parameter carrying the search text.
pub const QUERY_PARAM: &str = "q";

/// Query parameter carrying the recency window in days.
pub const DAYS_PARAM: &str = "days";

/// A validated search, constructed fresh for each invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Search text
    pub query: String,

    /// Only videos published within this many days are eligible
    pub window_days: u32,

    /// Page size requested from the search stage
    pub max_results: u32,
}

impl SearchRequest {
    /// Build a request from optional query string parameters.
    ///
    /// Missing parameters fall back to the configured defaults. `days` must be
    /// a non-negative integer; surrounding whitespace is ignored.
    pub fn from_params(
        params: Option<&HashMap<String, String>>,
        config: &AppConfig,
    ) -> Result<Self> {
        let query = params
            .and_then(|p| p.get(QUERY_PARAM))
            .cloned()
            .unwrap_or_else(|| config.default_query.clone());

        let window_days = match params.and_then(|p| p.get(DAYS_PARAM)) {
            Some(raw) => parse_days(raw)?,
            None => config.default_days,
        };

        Ok(Self {
            query,
            window_days,
            max_results: config.max_results,
        })
    }

    /// Lower publish-time bound for the search stage, relative to `now`.
    pub fn published_after(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
        Duration::try_days(i64::from(self.window_days))
            .and_then(|window| now.checked_sub_signed(window))
            .ok_or_else(|| {
                AppError::parameter(format!(
                    "invalid value for '{DAYS_PARAM}': {} is out of range",
                    self.window_days
                ))
            })
    }
}

/// Render a timestamp as `YYYY-MM-DDTHH:MM:SS.ffffffZ`.
pub fn format_rfc3339_micros(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

fn parse_days(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    let days: i64 = trimmed.parse().map_err(|e| {
        AppError::parameter(format!("invalid value for '{DAYS_PARAM}': '{raw}' ({e})"))
    })?;
    u32::try_from(days).map_err(|_| {
        AppError::parameter(format!(
            "invalid value for '{DAYS_PARAM}': '{raw}' (must be a non-negative integer)"
        ))
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_no_params() {
        let request = SearchRequest::from_params(None, &AppConfig::default()).unwrap();
        assert_eq!(request.query, "genAI");
        assert_eq!(request.window_days, 7);
        assert_eq!(request.max_results, 5);
    }

    #[test]
    fn test_explicit_params() {
        let p = params(&[("q", "rust async"), ("days", " 30 ")]);
        let request = SearchRequest::from_params(Some(&p), &AppConfig::default()).unwrap();
        assert_eq!(request.query, "rust async");
        assert_eq!(request.window_days, 30);
    }

    #[test]
    fn test_non_numeric_days_is_parameter_error() {
        let p = params(&[("days", "abc")]);
        let err = SearchRequest::from_params(Some(&p), &AppConfig::default()).unwrap_err();
        assert!(err.is_client_error());
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_negative_days_is_parameter_error() {
        let p = params(&[("days", "-3")]);
        let err = SearchRequest::from_params(Some(&p), &AppConfig::default()).unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_zero_days_allowed() {
        let p = params(&[("days", "0")]);
        let request = SearchRequest::from_params(Some(&p), &AppConfig::default()).unwrap();
        assert_eq!(request.window_days, 0);
    }

    #[test]
    fn test_published_after_format() {
        let now = Utc
            .with_ymd_and_hms(2024, 3, 15, 12, 30, 45)
            .unwrap()
            .checked_add_signed(Duration::microseconds(123_456))
            .unwrap();
        let request = SearchRequest::from_params(None, &AppConfig::default()).unwrap();
        let after = request.published_after(now).unwrap();
        assert_eq!(format_rfc3339_micros(after), "2024-03-08T12:30:45.123456Z");
    }

    #[test]
    fn test_huge_window_is_parameter_error() {
        let p = params(&[("days", "4000000000")]);
        let request = SearchRequest::from_params(Some(&p), &AppConfig::default()).unwrap();
        let err = request.published_after(Utc::now()).unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_whole_seconds_still_render_fraction() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_rfc3339_micros(ts), "2024-01-01T00:00:00.000000Z");
    }
}
