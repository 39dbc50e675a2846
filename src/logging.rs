// src/logging.rs

//! Logging seam for the search pipeline.
//!
//! The service never touches a global logger directly; it is handed a
//! [`SearchLog`] at construction. [`LogSearchLog`] forwards to the `log`
//! facade, which the binaries wire to `tracing` (Lambda) or `env_logger` (CLI)
//! once at start-up.

use std::sync::Mutex;

use url::Url;

use crate::error::AppError;
use crate::utils::url::redact_param;

/// Query parameter carrying the API key on outbound URLs.
const KEY_PARAM: &str = "key";

/// Events the search pipeline reports.
pub trait SearchLog: Send + Sync {
    /// An outbound request is about to be sent. `url` still carries the key.
    fn fetching(&self, url: &Url);

    /// An invocation failed with an upstream error the caller will not see.
    fn upstream_failed(&self, error: &AppError);
}

/// Production logger backed by the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSearchLog;

impl SearchLog for LogSearchLog {
    fn fetching(&self, url: &Url) {
        log::info!("Fetching URL: {}", redact_param(url, KEY_PARAM));
    }

    fn upstream_failed(&self, error: &AppError) {
        log::error!("Video search failed ({}): {}", error.kind(), error);
    }
}

/// Logged event, as captured by [`MemorySearchLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggedEvent {
    Fetching(String),
    UpstreamFailed { kind: &'static str, message: String },
}

/// Logger that records events in memory, applying the same redaction as the
/// production logger.
#[derive(Debug, Default)]
pub struct MemorySearchLog {
    events: Mutex<Vec<LoggedEvent>>,
}

impl MemorySearchLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<LoggedEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Redacted URLs of every outbound request, in order.
    pub fn fetched_urls(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                LoggedEvent::Fetching(url) => Some(url),
                LoggedEvent::UpstreamFailed { .. } => None,
            })
            .collect()
    }

    fn push(&self, event: LoggedEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl SearchLog for MemorySearchLog {
    fn fetching(&self, url: &Url) {
        self.push(LoggedEvent::Fetching(redact_param(url, KEY_PARAM)));
    }

    fn upstream_failed(&self, error: &AppError) {
        self.push(LoggedEvent::UpstreamFailed {
            kind: error.kind(),
            message: error.to_string(),
        });
    }
}
