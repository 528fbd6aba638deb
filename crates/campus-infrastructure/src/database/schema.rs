//! Idempotent DDL for the database and its two record tables

use sqlx::mysql::{MySqlConnection, MySqlPool};
use sqlx::{Connection, Executor};
use tracing::{info, warn};

use super::connection::{server_options, PoolSettings};
use super::DatabaseConfig;
use crate::error::StartupError;

pub const CREATE_STUDENT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS student (
    id INT AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(255),
    roll_no VARCHAR(255),
    class VARCHAR(255),
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

pub const CREATE_TEACHER_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS teacher (
    id INT AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(255),
    subject VARCHAR(255),
    class VARCHAR(255),
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

/// `CREATE DATABASE IF NOT EXISTS` with the name quoted as an identifier.
pub fn create_database_statement(name: &str) -> String {
    format!("CREATE DATABASE IF NOT EXISTS `{}`", name.replace('`', "``"))
}

/// Creates the target database through a short-lived server connection.
///
/// The connection is closed on every path, including when the statement fails.
pub async fn ensure_database(config: &DatabaseConfig, settings: &PoolSettings) -> Result<(), StartupError> {
    let mut conn = MySqlConnection::connect_with(&server_options(config, settings))
        .await
        .map_err(|e| StartupError::SchemaError(e.to_string()))?;

    let statement = create_database_statement(config.name());
    let result = conn.execute(sqlx::raw_sql(&statement)).await;

    if let Err(e) = conn.close().await {
        warn!(error = %e, "Failed to close bootstrap connection");
    }

    result.map_err(|e| StartupError::SchemaError(e.to_string()))?;
    info!(database = config.name(), "Database ensured");
    Ok(())
}

pub async fn ensure_tables(pool: &MySqlPool) -> Result<(), StartupError> {
    for (table, statement) in [("student", CREATE_STUDENT_TABLE), ("teacher", CREATE_TEACHER_TABLE)] {
        sqlx::raw_sql(statement)
            .execute(pool)
            .await
            .map_err(|e| StartupError::SchemaError(format!("{} table: {}", table, e)))?;
    }
    info!("Tables ensured");
    Ok(())
}
