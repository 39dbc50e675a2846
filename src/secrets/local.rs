//! In-process secret stores for local runs and tests.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::secrets::{API_KEY_FIELD, SecretStore};

/// Secret store backed by an in-memory map.
#[derive(Debug, Clone, Default)]
pub struct StaticSecretStore {
    secrets: HashMap<String, String>,
}

impl StaticSecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw secret payload under `name`.
    pub fn with_secret(mut self, name: impl Into<String>, payload: impl Into<String>) -> Self {
        self.secrets.insert(name.into(), payload.into());
        self
    }

    /// Store a bare API key under `name`, wrapped in the expected payload.
    pub fn with_api_key(self, name: impl Into<String>, key: &str) -> Self {
        let payload = serde_json::json!({ API_KEY_FIELD: key }).to_string();
        self.with_secret(name, payload)
    }
}

#[async_trait]
impl SecretStore for StaticSecretStore {
    async fn get_secret(&self, name: &str) -> Result<String> {
        self.secrets
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::credential(name, "secret not found"))
    }
}

/// Secret store reading a bare API key from an environment variable.
///
/// Every secret name resolves to the same variable, so the CLI can run
/// without a managed secret store.
#[derive(Debug, Clone)]
pub struct EnvSecretStore {
    var: String,
}

impl EnvSecretStore {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvSecretStore {
    fn default() -> Self {
        Self::new(API_KEY_FIELD)
    }
}

#[async_trait]
impl SecretStore for EnvSecretStore {
    async fn get_secret(&self, name: &str) -> Result<String> {
        let key = std::env::var(&self.var).map_err(|e| {
            AppError::credential(name, format!("environment variable {}: {e}", self.var))
        })?;
        Ok(serde_json::json!({ API_KEY_FIELD: key }).to_string())
    }
}
