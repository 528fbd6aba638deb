// ============================================================================
// Campus Infrastructure - MySQL Teacher Repository
// File: crates/campus-infrastructure/src/database/mysql/teacher_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, MySqlPool};
use tracing::error;

use campus_core::domain::{NewTeacher, RecordId, Teacher};
use campus_core::error::DomainError;
use campus_core::repositories::TeacherRepository;

pub struct MySqlTeacherRepository {
    pool: MySqlPool,
}

impl MySqlTeacherRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TeacherRow {
    pub id: i32,
    pub name: Option<String>,
    pub subject: Option<String>,
    pub class: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<TeacherRow> for Teacher {
    fn from(row: TeacherRow) -> Self {
        Teacher {
            id: row.id,
            name: row.name,
            subject: row.subject,
            class: row.class,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl TeacherRepository for MySqlTeacherRepository {
    async fn find_all(&self) -> Result<Vec<Teacher>, DomainError> {
        let rows: Vec<TeacherRow> = sqlx::query_as(
            "SELECT id, name, subject, class, created_at FROM teacher"
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing teachers: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Teacher::from).collect())
    }

    async fn create(&self, teacher: &NewTeacher) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO teacher (name, subject, class) VALUES (?, ?, ?)")
            .bind(&teacher.name)
            .bind(&teacher.subject)
            .bind(&teacher.class)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error creating teacher: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }

    async fn delete(&self, id: RecordId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM teacher WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting teacher {}: {}", id, e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
