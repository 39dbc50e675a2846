// src/services/search.rs

//! Video search service.
//!
//! Handles one request end to end:
//! 1. Parses `q` and `days` into a [`SearchRequest`]
//! 2. Resolves the API key from the secret store
//! 3. Runs the search stage, short-circuiting on zero candidates
//! 4. Enriches the candidates through the details stage
//!
//! Parameter errors surface as 400 with their message. Every other failure
//! surfaces as 500 with a fixed message and is logged with its cause.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::{AppError, Result};
use crate::logging::SearchLog;
use crate::models::{AppConfig, SearchRequest, VideoResult};
use crate::secrets::{SecretStore, resolve_api_key};
use crate::services::YouTubeClient;
use crate::utils::{Clock, SystemClock};

/// Message returned to the caller for every upstream failure.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "YouTube search failed";

/// Status and JSON body produced for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub status_code: u16,
    pub body: String,
}

impl SearchResponse {
    fn ok(body: String) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }

    fn error(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            body: serde_json::json!({ "error": message }).to_string(),
        }
    }

    fn client_error(error: &AppError) -> Self {
        Self::error(400, &error.to_string())
    }

    fn server_error() -> Self {
        Self::error(500, UPSTREAM_FAILURE_MESSAGE)
    }
}

/// Service answering video search requests.
pub struct VideoSearchService {
    config: AppConfig,
    platform: YouTubeClient,
    secrets: Arc<dyn SecretStore>,
    log: Arc<dyn SearchLog>,
    clock: Arc<dyn Clock>,
}

impl VideoSearchService {
    /// Create a new service. The HTTP client and secret store are shared
    /// across invocations.
    pub fn new(
        config: AppConfig,
        client: reqwest::Client,
        secrets: Arc<dyn SecretStore>,
        log: Arc<dyn SearchLog>,
    ) -> Self {
        let platform = YouTubeClient::new(client, config.api_base_url.clone());
        Self {
            config,
            platform,
            secrets,
            log,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the wall clock used to compute the recency bound.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Handle one invocation given its query string parameters.
    pub async fn handle(&self, params: Option<&HashMap<String, String>>) -> SearchResponse {
        let (request, published_after) = match self.prepare(params) {
            Ok(prepared) => prepared,
            Err(e) => {
                log::warn!("Rejected search parameters: {}", e);
                return SearchResponse::client_error(&e);
            }
        };

        let outcome = self
            .run(&request, published_after)
            .await
            .and_then(|videos| Ok(serde_json::to_string(&videos)?));

        match outcome {
            Ok(body) => SearchResponse::ok(body),
            Err(e) => {
                self.log.upstream_failed(&e);
                SearchResponse::server_error()
            }
        }
    }

    /// Run a search for an already validated request.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<VideoResult>> {
        let published_after = request.published_after(self.clock.now())?;
        self.run(request, published_after).await
    }

    fn prepare(
        &self,
        params: Option<&HashMap<String, String>>,
    ) -> Result<(SearchRequest, DateTime<Utc>)> {
        let request = SearchRequest::from_params(params, &self.config)?;
        let published_after = request.published_after(self.clock.now())?;
        Ok((request, published_after))
    }

    async fn run(
        &self,
        request: &SearchRequest,
        published_after: DateTime<Utc>,
    ) -> Result<Vec<VideoResult>> {
        let key = resolve_api_key(self.secrets.as_ref(), &self.config.secret_name).await?;

        let candidates = self
            .platform
            .search(request, published_after, &key, self.log.as_ref())
            .await?;

        if candidates.is_empty() {
            log::info!("No videos found for query '{}'", request.query);
            return Ok(Vec::new());
        }

        let videos = self
            .platform
            .video_details(&candidates, &key, self.log.as_ref())
            .await?;

        log::info!(
            "Query '{}' matched {} candidates, {} videos returned",
            request.query,
            candidates.len(),
            videos.len()
        );
        Ok(videos)
    }
}
