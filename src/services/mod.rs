//! Service layer for the video search application.
//!
//! This module contains the business logic for:
//! - Platform API access (`YouTubeClient`)
//! - Request handling (`VideoSearchService`)

mod search;
mod youtube;

pub use search::{SearchResponse, UPSTREAM_FAILURE_MESSAGE, VideoSearchService};
pub use youtube::YouTubeClient;
