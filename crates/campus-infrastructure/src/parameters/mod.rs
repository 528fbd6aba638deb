//! Parameter store access (port + fetcher)

pub mod env;
pub mod ssm;

pub use env::EnvParameterSource;
pub use ssm::SsmParameterSource;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use campus_shared::config::ParameterSettings;
use thiserror::Error;
use tracing::debug;

use crate::database::DatabaseConfig;
use crate::error::StartupError;

#[derive(Error, Debug)]
pub enum ParameterError {
    #[error("parameter store unreachable: {0}")]
    Unreachable(String),
}

impl From<ParameterError> for StartupError {
    fn from(err: ParameterError) -> Self {
        StartupError::ConfigError(err.to_string())
    }
}

/// A key-value store holding the database credentials.
///
/// Implementations return whatever subset of `names` they hold. Absent
/// names are simply left out of the map.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParameterSource: Send + Sync {
    async fn get_parameters(&self, names: &[String]) -> Result<HashMap<String, String>, ParameterError>;
}

/// Names of the four credential parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterKeys {
    pub host: String,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl ParameterKeys {
    pub fn names(&self) -> Vec<String> {
        vec![
            self.host.clone(),
            self.user.clone(),
            self.password.clone(),
            self.name.clone(),
        ]
    }
}

impl From<&ParameterSettings> for ParameterKeys {
    fn from(settings: &ParameterSettings) -> Self {
        Self {
            host: settings.host_key.clone(),
            user: settings.user_key.clone(),
            password: settings.password_key.clone(),
            name: settings.name_key.clone(),
        }
    }
}

/// Reads a fresh [`DatabaseConfig`] from a [`ParameterSource`].
///
/// One outbound call per `fetch`, no internal retry.
#[derive(Clone)]
pub struct ParameterFetcher {
    source: Arc<dyn ParameterSource>,
    keys: ParameterKeys,
}

impl ParameterFetcher {
    pub fn new(source: Arc<dyn ParameterSource>, keys: ParameterKeys) -> Self {
        Self { source, keys }
    }

    pub async fn fetch(&self) -> Result<DatabaseConfig, StartupError> {
        let mut values = self.source.get_parameters(&self.keys.names()).await?;
        debug!(received = values.len(), "Fetched database parameters");

        let mut take = |key: &str| {
            values
                .remove(key)
                .ok_or_else(|| StartupError::ConfigError(format!("parameter {} is missing", key)))
        };

        let host = take(self.keys.host.as_str())?;
        let user = take(self.keys.user.as_str())?;
        let password = take(self.keys.password.as_str())?;
        let name = take(self.keys.name.as_str())?;

        DatabaseConfig::new(host, user, password, name)
    }
}
