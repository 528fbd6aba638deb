//! AWS Systems Manager Parameter Store adapter

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_ssm::config::Region;
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::Client;
use tracing::{debug, warn};

use super::{ParameterError, ParameterSource};

/// Reads SecureString parameters with decryption enabled.
#[derive(Clone)]
pub struct SsmParameterSource {
    client: Client,
}

impl SsmParameterSource {
    /// Builds a client from the default AWS provider chain.
    pub async fn from_env(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let sdk_config = loader.load().await;
        Self::from_client(Client::new(&sdk_config))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ParameterSource for SsmParameterSource {
    async fn get_parameters(&self, names: &[String]) -> Result<HashMap<String, String>, ParameterError> {
        let output = self
            .client
            .get_parameters()
            .set_names(Some(names.to_vec()))
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| ParameterError::Unreachable(DisplayErrorContext(&e).to_string()))?;

        let invalid = output.invalid_parameters();
        if !invalid.is_empty() {
            warn!(?invalid, "Parameter store reported unknown parameters");
        }

        let values: HashMap<String, String> = output
            .parameters()
            .iter()
            .filter_map(|p| Some((p.name()?.to_string(), p.value()?.to_string())))
            .collect();
        debug!(count = values.len(), "Parameters received from SSM");
        Ok(values)
    }
}
