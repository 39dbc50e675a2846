// src/lambda/mod.rs

//! AWS Lambda handler for the video search service.
//!
//! The function sits behind an API Gateway proxy integration:
//! 1. Reads `queryStringParameters` from the proxy event
//! 2. Delegates to [`VideoSearchService::handle`]
//! 3. Wraps the status and JSON body in a proxy response

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::services::{SearchResponse, VideoSearchService};

/// API Gateway proxy event. Only the query string is read.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    /// Query string parameters; API Gateway sends `null` when there are none
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

/// API Gateway proxy response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl From<SearchResponse> for ProxyResponse {
    fn from(response: SearchResponse) -> Self {
        let headers = HashMap::from([(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )]);
        Self {
            status_code: response.status_code,
            headers,
            body: response.body,
        }
    }
}

/// Handle one proxy event.
pub async fn handle_event(service: &VideoSearchService, request: ProxyRequest) -> ProxyResponse {
    service
        .handle(request.query_string_parameters.as_ref())
        .await
        .into()
}

/// Main Lambda handler function.
#[cfg(feature = "lambda")]
#[tracing::instrument(skip_all, fields(request_id = %event.context.request_id))]
pub async fn handler(
    service: &VideoSearchService,
    event: lambda_runtime::LambdaEvent<ProxyRequest>,
) -> Result<ProxyResponse, lambda_runtime::Error> {
    let (request, _context) = event.into_parts();
    let response = handle_event(service, request).await;
    tracing::info!(status = response.status_code, "Search request completed");
    Ok(response)
}
