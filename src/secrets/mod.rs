//! Secret store abstractions for API credential lookup.
//!
//! The service only needs one capability from a secret store: return the raw
//! secret string for a name. The secret payload is expected to be a JSON
//! object carrying the platform API key:
//!
//! ```text
//! { "YOUTUBE_API_KEY": "AIza..." }
//! ```

#[cfg(feature = "aws")]
pub mod aws;
pub mod local;

use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{AppError, Result};

// Re-export for convenience
#[cfg(feature = "aws")]
pub use aws::AwsSecretStore;
pub use local::{EnvSecretStore, StaticSecretStore};

/// Field of the secret payload holding the API key.
pub const API_KEY_FIELD: &str = "YOUTUBE_API_KEY";

/// Trait for secret store backends.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the raw secret string stored under `name`.
    async fn get_secret(&self, name: &str) -> Result<String>;
}

/// Platform API key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

#[derive(Deserialize)]
struct ApiKeyPayload {
    #[serde(rename = "YOUTUBE_API_KEY")]
    api_key: String,
}

/// Fetch `name` from the store and extract the API key from its payload.
///
/// Every failure, including a malformed payload, is a credential error.
pub async fn resolve_api_key(store: &dyn SecretStore, name: &str) -> Result<ApiKey> {
    let raw = store.get_secret(name).await.map_err(|e| match e {
        AppError::Credential { .. } => e,
        other => AppError::credential(name, other),
    })?;

    let payload: ApiKeyPayload = serde_json::from_str(&raw).map_err(|e| {
        AppError::credential(
            name,
            format!("payload is not a JSON object with {API_KEY_FIELD}: {e}"),
        )
    })?;

    if payload.api_key.trim().is_empty() {
        return Err(AppError::credential(name, format!("{API_KEY_FIELD} is empty")));
    }

    Ok(ApiKey(payload.api_key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_api_key() {
        let store = StaticSecretStore::new()
            .with_secret("youtube/api/key", r#"{"YOUTUBE_API_KEY": "AIza-test"}"#);
        let key = resolve_api_key(&store, "youtube/api/key").await.unwrap();
        assert_eq!(key.expose(), "AIza-test");
    }

    #[tokio::test]
    async fn test_missing_secret_is_credential_error() {
        let store = StaticSecretStore::new();
        let err = resolve_api_key(&store, "youtube/api/key").await.unwrap_err();
        assert_eq!(err.kind(), "credential");
    }

    #[tokio::test]
    async fn test_payload_without_key_is_credential_error() {
        let store = StaticSecretStore::new().with_secret("s", r#"{"OTHER": "x"}"#);
        let err = resolve_api_key(&store, "s").await.unwrap_err();
        assert_eq!(err.kind(), "credential");
    }

    #[tokio::test]
    async fn test_non_json_payload_is_credential_error() {
        let store = StaticSecretStore::new().with_secret("s", "AIza-plain");
        let err = resolve_api_key(&store, "s").await.unwrap_err();
        assert_eq!(err.kind(), "credential");
    }

    #[tokio::test]
    async fn test_empty_key_is_credential_error() {
        let store = StaticSecretStore::new().with_secret("s", r#"{"YOUTUBE_API_KEY": " "}"#);
        assert!(resolve_api_key(&store, "s").await.is_err());
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("AIza-secret");
        assert_eq!(format!("{key:?}"), "ApiKey(****)");
    }
}
