//! AWS Lambda entry point for the video search service.
//!
//! Deploy with `cargo lambda build --release --features lambda`.
//!
//! ## Environment Variables
//!
//! - `YOUTUBE_API_SECRET_NAME`: secret holding `YOUTUBE_API_KEY` (default: `youtube/api/key`)
//! - `AWS_REGION`: Secrets Manager region (default: `us-east-1`)
//! - `SEARCH_MAX_RESULTS`: videos per search (default: `5`)
//! - `HTTP_TIMEOUT_SECS`: outbound request timeout (default: `10`)
//! - `RUST_LOG`: Log level (e.g., `info`, `debug`)

use std::sync::Arc;

use lambda_runtime::{Error as LambdaError, LambdaEvent, service_fn};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use video_search::config;
use video_search::lambda::{ProxyRequest, handler};
use video_search::logging::LogSearchLog;
use video_search::secrets::AwsSecretStore;
use video_search::services::VideoSearchService;
use video_search::utils::http::create_async_client;

/// Main entry point for the AWS Lambda function.
#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = config::load_from_env()?;
    info!(
        "Video search Lambda starting: secret={}, region={}, max_results={}",
        config.secret_name, config.region, config.max_results
    );

    let client = create_async_client(&config.http)?;
    let secrets = AwsSecretStore::for_region(config.region.clone()).await;
    let service = VideoSearchService::new(
        config,
        client,
        Arc::new(secrets),
        Arc::new(LogSearchLog),
    );
    let service = &service;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<ProxyRequest>| async move {
        handler(service, event).await
    }))
    .await
}
