//! Student repository trait (port)

use async_trait::async_trait;
use crate::domain::{NewStudent, RecordId, Student};
use crate::error::DomainError;

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Student>, DomainError>;
    async fn create(&self, student: &NewStudent) -> Result<(), DomainError>;
    /// Returns `false` when no row matched `id`.
    async fn delete(&self, id: RecordId) -> Result<bool, DomainError>;
}
