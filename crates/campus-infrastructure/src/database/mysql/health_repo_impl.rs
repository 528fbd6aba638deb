use async_trait::async_trait;
use sqlx::MySqlPool;

use campus_core::error::DomainError;
use campus_core::repositories::HealthRepository;

pub struct MySqlHealthRepository {
    pool: MySqlPool,
}

impl MySqlHealthRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthRepository for MySqlHealthRepository {
    async fn ping(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar("SELECT 1 AS db_up")
            .fetch_one(&self.pool)
            .await
            .map_err(|e: sqlx::Error| DomainError::DatabaseError(e.to_string()))
    }
}
