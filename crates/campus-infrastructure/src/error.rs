//! Startup error taxonomy

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StartupError {
    /// Parameter store unreachable, or a required key missing or empty.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A `CREATE DATABASE` / `CREATE TABLE` statement or its connection failed.
    #[error("Schema error: {0}")]
    SchemaError(String),

    #[error("Pool error: {0}")]
    PoolError(String),

    #[error("Startup failed after {attempts} attempt(s): {source}")]
    Exhausted {
        attempts: u32,
        #[source]
        source: Box<StartupError>,
    },
}
