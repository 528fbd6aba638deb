// ============================================================================
// Campus Infrastructure - Database Credentials
// File: crates/campus-infrastructure/src/database/config.rs
// ============================================================================

use std::fmt;

use validator::Validate;

use crate::error::StartupError;

/// Credentials for one startup attempt. Immutable once built.
#[derive(Clone, Validate)]
pub struct DatabaseConfig {
    #[validate(length(min = 1, message = "database host is required"))]
    host: String,

    #[validate(length(min = 1, message = "database user is required"))]
    user: String,

    #[validate(length(min = 1, message = "database password is required"))]
    password: String,

    #[validate(length(min = 1, message = "database name is required"))]
    name: String,
}

impl DatabaseConfig {
    pub fn new(host: String, user: String, password: String, name: String) -> Result<Self, StartupError> {
        let config = Self { host, user, password, name };
        config
            .validate()
            .map_err(|e| StartupError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"***")
            .field("name", &self.name)
            .finish()
    }
}
