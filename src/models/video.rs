//! Video records: platform wire formats and the normalized output.

use serde::{Deserialize, Serialize};

/// Watch page prefix; a result's URL is this followed by its id.
pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// A video found by the search stage, not yet enriched with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCandidate {
    pub video_id: String,
}

/// A normalized video returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoResult {
    pub id: String,
    pub title: String,
    pub channel_title: String,
    /// ISO-8601 publish timestamp, passed through as the platform sent it
    pub published_at: String,
    pub view_count: String,
    pub like_count: String,
    pub url: String,
}

impl From<VideoItem> for VideoResult {
    fn from(item: VideoItem) -> Self {
        let stats = item.statistics.unwrap_or_default();
        let url = format!("{WATCH_URL_PREFIX}{}", item.id);
        Self {
            url,
            id: item.id,
            title: item.snippet.title,
            channel_title: item.snippet.channel_title,
            published_at: item.snippet.published_at,
            view_count: stats.view_count.unwrap_or_else(zero),
            like_count: stats.like_count.unwrap_or_else(zero),
        }
    }
}

fn zero() -> String {
    "0".to_string()
}

// --- Search endpoint ---

/// Response body of the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

impl SearchListResponse {
    /// Candidates in the order the platform returned them.
    pub fn into_candidates(self) -> Vec<VideoCandidate> {
        self.items
            .into_iter()
            .map(|item| VideoCandidate {
                video_id: item.id.video_id,
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    pub video_id: String,
}

// --- Videos endpoint ---

/// Response body of the video details endpoint.
#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
pub struct VideoItem {
    pub id: String,
    pub snippet: Snippet,
    #[serde(default)]
    pub statistics: Option<Statistics>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: String,
    pub channel_title: String,
    pub published_at: String,
}

/// Engagement counters; the platform omits any that are hidden or disabled.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(default)]
    pub view_count: Option<String>,
    #[serde(default)]
    pub like_count: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_keeps_order() {
        let json = r#"{
            "kind": "youtube#searchListResponse",
            "items": [
                {"id": {"kind": "youtube#video", "videoId": "b"}, "snippet": {"title": "B"}},
                {"id": {"kind": "youtube#video", "videoId": "a"}, "snippet": {"title": "A"}}
            ]
        }"#;
        let response: SearchListResponse = serde_json::from_str(json).unwrap();
        let ids: Vec<_> = response
            .into_candidates()
            .into_iter()
            .map(|c| c.video_id)
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_search_response_without_items_is_empty() {
        let response: SearchListResponse = serde_json::from_str(r#"{"kind": "x"}"#).unwrap();
        assert!(response.into_candidates().is_empty());
    }

    #[test]
    fn test_search_item_without_video_id_fails() {
        let json = r#"{"items": [{"id": {"kind": "youtube#channel", "channelId": "c"}}]}"#;
        assert!(serde_json::from_str::<SearchListResponse>(json).is_err());
    }

    #[test]
    fn test_video_result_defaults_missing_like_count() {
        let json = r#"{
            "id": "abc123",
            "snippet": {"title": "T", "channelTitle": "C", "publishedAt": "2024-03-10T08:00:00Z"},
            "statistics": {"viewCount": "1500"}
        }"#;
        let item: VideoItem = serde_json::from_str(json).unwrap();
        let result = VideoResult::from(item);
        assert_eq!(result.view_count, "1500");
        assert_eq!(result.like_count, "0");
        assert_eq!(result.url, "https://www.youtube.com/watch?v=abc123");
    }

    #[test]
    fn test_video_result_without_statistics_object() {
        let json = r#"{
            "id": "xyz",
            "snippet": {"title": "T", "channelTitle": "C", "publishedAt": "2024-03-10T08:00:00Z"}
        }"#;
        let item: VideoItem = serde_json::from_str(json).unwrap();
        let result = VideoResult::from(item);
        assert_eq!(result.view_count, "0");
        assert_eq!(result.like_count, "0");
    }

    #[test]
    fn test_video_result_serializes_camel_case() {
        let result = VideoResult {
            id: "id1".into(),
            title: "Title".into(),
            channel_title: "Channel".into(),
            published_at: "2024-03-10T08:00:00Z".into(),
            view_count: "10".into(),
            like_count: "2".into(),
            url: format!("{WATCH_URL_PREFIX}id1"),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["channelTitle"], "Channel");
        assert_eq!(value["publishedAt"], "2024-03-10T08:00:00Z");
        assert_eq!(value["viewCount"], "10");
        assert_eq!(value["likeCount"], "2");
        assert_eq!(value["url"], "https://www.youtube.com/watch?v=id1");
    }
}
