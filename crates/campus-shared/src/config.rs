//! Configuration management

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::*;
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub parameters: ParameterSettings,
    pub database: DatabaseSettings,
    pub startup: StartupSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub request_timeout_secs: u64,
}

/// Where the database credentials are read from.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParameterBackend {
    Ssm,
    Env,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ParameterSettings {
    pub backend: ParameterBackend,
    pub region: Option<String>,
    pub host_key: String,
    pub user_key: String,
    pub password_key: String,
    pub name_key: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SslMode {
    Disabled,
    Preferred,
    /// Encrypted transport, server certificate not checked.
    Required,
    VerifyCa,
    VerifyIdentity,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub port: u16,
    pub max_connections: u32,
    pub ssl_mode: SslMode,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StartupSettings {
    pub max_attempts: u32,
    pub retry_delay_ms: u64,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::defaults_builder()?
            .set_override("app.env", env.clone())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        Self::from_config(config)
    }

    /// Built-in defaults only, no files or environment.
    pub fn defaults() -> Result<Self, AppError> {
        Self::from_config(Self::defaults_builder()?.build()?)
    }

    fn defaults_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", i64::from(DEFAULT_PORT))?
            .set_default("app.name", SERVICE_NAME)?
            .set_default("app.request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS as i64)?
            .set_default("parameters.backend", "ssm")?
            .set_default("parameters.host_key", DEFAULT_HOST_KEY)?
            .set_default("parameters.user_key", DEFAULT_USER_KEY)?
            .set_default("parameters.password_key", DEFAULT_PASSWORD_KEY)?
            .set_default("parameters.name_key", DEFAULT_NAME_KEY)?
            .set_default("database.port", i64::from(DEFAULT_DB_PORT))?
            .set_default("database.max_connections", i64::from(DEFAULT_MAX_CONNECTIONS))?
            .set_default("database.ssl_mode", DEFAULT_SSL_MODE)?
            .set_default("startup.max_attempts", i64::from(DEFAULT_MAX_ATTEMPTS))?
            .set_default("startup.retry_delay_ms", DEFAULT_RETRY_DELAY_MS as i64)
    }

    fn from_config(config: Config) -> Result<Self, AppError> {
        let parsed: AppConfig = config.try_deserialize()?;
        parsed.validate()?;
        Ok(parsed)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.startup.max_attempts == 0 {
            return Err(AppError::InvalidSetting {
                key: "startup.max_attempts".into(),
                message: "must be at least 1".into(),
            });
        }
        if self.database.max_connections == 0 {
            return Err(AppError::InvalidSetting {
                key: "database.max_connections".into(),
                message: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
