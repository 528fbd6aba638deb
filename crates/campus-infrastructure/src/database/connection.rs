//! Database connection pool

use campus_shared::config::{DatabaseSettings, SslMode};
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlSslMode};
use tracing::info;

use super::DatabaseConfig;
use crate::error::StartupError;

/// Transport and sizing policy applied to every connection.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub port: u16,
    pub max_connections: u32,
    pub ssl_mode: SslMode,
}

impl From<&DatabaseSettings> for PoolSettings {
    fn from(settings: &DatabaseSettings) -> Self {
        Self {
            port: settings.port,
            max_connections: settings.max_connections,
            ssl_mode: settings.ssl_mode,
        }
    }
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            port: campus_shared::constants::DEFAULT_DB_PORT,
            max_connections: campus_shared::constants::DEFAULT_MAX_CONNECTIONS,
            ssl_mode: SslMode::Required,
        }
    }
}

fn mysql_ssl_mode(mode: SslMode) -> MySqlSslMode {
    match mode {
        SslMode::Disabled => MySqlSslMode::Disabled,
        SslMode::Preferred => MySqlSslMode::Preferred,
        SslMode::Required => MySqlSslMode::Required,
        SslMode::VerifyCa => MySqlSslMode::VerifyCa,
        SslMode::VerifyIdentity => MySqlSslMode::VerifyIdentity,
    }
}

/// Options for a server-level connection, no database selected.
pub fn server_options(config: &DatabaseConfig, settings: &PoolSettings) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(config.host())
        .port(settings.port)
        .username(config.user())
        .password(config.password())
        .ssl_mode(mysql_ssl_mode(settings.ssl_mode))
}

pub fn database_options(config: &DatabaseConfig, settings: &PoolSettings) -> MySqlConnectOptions {
    server_options(config, settings).database(config.name())
}

/// Connects eagerly so an unreachable server fails the current attempt.
pub async fn build_pool(config: &DatabaseConfig, settings: &PoolSettings) -> Result<MySqlPool, StartupError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(database_options(config, settings))
        .await
        .map_err(|e| StartupError::PoolError(e.to_string()))?;

    info!(
        host = config.host(),
        database = config.name(),
        max_connections = settings.max_connections,
        "Connection pool ready"
    );
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DatabaseConfig {
        DatabaseConfig::new("db.internal".into(), "app".into(), "secret".into(), "school".into()).unwrap()
    }

    #[test]
    fn test_server_options_select_no_database() {
        let options = server_options(&config(), &PoolSettings::default());
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 3306);
        assert_eq!(options.get_username(), "app");
        assert!(options.get_database().is_none());
    }

    #[test]
    fn test_database_options_select_target() {
        let options = database_options(&config(), &PoolSettings::default());
        assert_eq!(options.get_database(), Some("school"));
    }

    #[test]
    fn test_default_tls_encrypts_without_verification() {
        let options = server_options(&config(), &PoolSettings::default());
        assert!(matches!(options.get_ssl_mode(), MySqlSslMode::Required));
    }

    #[test]
    fn test_ssl_mode_mapping() {
        assert!(matches!(mysql_ssl_mode(SslMode::Disabled), MySqlSslMode::Disabled));
        assert!(matches!(mysql_ssl_mode(SslMode::VerifyIdentity), MySqlSslMode::VerifyIdentity));
    }
}
