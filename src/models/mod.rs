// src/models/mod.rs

//! Domain models for the video search service.

mod config;
mod request;
mod video;

// Re-export all public types
pub use config::{AppConfig, HttpConfig, MAX_PAGE_SIZE};
pub use request::{DAYS_PARAM, QUERY_PARAM, SearchRequest, format_rfc3339_micros};
pub use video::{
    SearchListResponse, VideoCandidate, VideoListResponse, VideoResult, WATCH_URL_PREFIX,
};
