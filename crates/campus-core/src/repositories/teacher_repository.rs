//! Teacher repository trait (port)

use async_trait::async_trait;
use crate::domain::{NewTeacher, RecordId, Teacher};
use crate::error::DomainError;

#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Teacher>, DomainError>;
    async fn create(&self, teacher: &NewTeacher) -> Result<(), DomainError>;
    /// Returns `false` when no row matched `id`.
    async fn delete(&self, id: RecordId) -> Result<bool, DomainError>;
}
