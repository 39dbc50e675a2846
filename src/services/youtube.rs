// src/services/youtube.rs

//! YouTube Data API client.
//!
//! Two calls are made per search: the search endpoint to find candidate ids
//! ranked by view count, then the videos endpoint to enrich those ids with
//! snippet and statistics fields.

use chrono::{DateTime, Utc};
use reqwest::Client;

use crate::error::Result;
use crate::logging::SearchLog;
use crate::models::{
    SearchListResponse, SearchRequest, VideoCandidate, VideoListResponse, VideoResult,
    format_rfc3339_micros,
};
use crate::secrets::ApiKey;
use crate::utils::http::fetch_json;
use crate::utils::url::endpoint;

const SEARCH_PATH: &str = "search";
const VIDEOS_PATH: &str = "videos";

/// Client for the platform's search and video details endpoints.
pub struct YouTubeClient {
    client: Client,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Find videos matching the request, most viewed first.
    pub async fn search(
        &self,
        request: &SearchRequest,
        published_after: DateTime<Utc>,
        key: &ApiKey,
        log: &dyn SearchLog,
    ) -> Result<Vec<VideoCandidate>> {
        let max_results = request.max_results.to_string();
        let published_after = format_rfc3339_micros(published_after);
        let url = endpoint(
            &self.base_url,
            SEARCH_PATH,
            &[
                ("part", "snippet"),
                ("q", request.query.as_str()),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
                ("publishedAfter", published_after.as_str()),
                ("order", "viewCount"),
                ("key", key.expose()),
            ],
        )?;

        log.fetching(&url);
        let response: SearchListResponse = fetch_json(&self.client, url).await?;
        Ok(response.into_candidates())
    }

    /// Look up snippet and statistics for the given candidates.
    ///
    /// Results follow the order of the details response.
    pub async fn video_details(
        &self,
        candidates: &[VideoCandidate],
        key: &ApiKey,
        log: &dyn SearchLog,
    ) -> Result<Vec<VideoResult>> {
        let ids = candidates
            .iter()
            .map(|c| c.video_id.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let url = endpoint(
            &self.base_url,
            VIDEOS_PATH,
            &[
                ("part", "snippet,statistics"),
                ("id", ids.as_str()),
                ("key", key.expose()),
            ],
        )?;

        log.fetching(&url);
        let response: VideoListResponse = fetch_json(&self.client, url).await?;
        Ok(response.items.into_iter().map(VideoResult::from).collect())
    }
}
