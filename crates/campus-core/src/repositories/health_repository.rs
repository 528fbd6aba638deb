//! Database liveness probe (port)

use async_trait::async_trait;
use crate::error::DomainError;

#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// Runs `SELECT 1 AS db_up` and returns the value.
    async fn ping(&self) -> Result<i64, DomainError>;
}
