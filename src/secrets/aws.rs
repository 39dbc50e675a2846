//! AWS Secrets Manager secret store.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::Client;
use log::{debug, info};

use crate::error::{AppError, Result};
use crate::secrets::SecretStore;

/// Secret store backed by AWS Secrets Manager.
#[derive(Debug, Clone)]
pub struct AwsSecretStore {
    client: Client,
}

impl AwsSecretStore {
    /// Create a store around an existing client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a store for `region` using the default credential chain.
    pub async fn for_region(region: impl Into<String>) -> Self {
        let region = region.into();
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.clone()))
            .load()
            .await;

        info!("Initialized Secrets Manager client in {}", region);
        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl SecretStore for AwsSecretStore {
    async fn get_secret(&self, name: &str) -> Result<String> {
        debug!("Fetching secret {} from Secrets Manager", name);

        let response = self
            .client
            .get_secret_value()
            .secret_id(name)
            .send()
            .await
            .map_err(|e| {
                let service_err = e.into_service_error();
                if service_err.is_resource_not_found_exception() {
                    AppError::credential(name, "secret not found")
                } else {
                    AppError::credential(name, service_err)
                }
            })?;

        response
            .secret_string()
            .map(str::to_string)
            .ok_or_else(|| AppError::credential(name, "secret is binary, not string"))
    }
}
