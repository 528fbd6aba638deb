// ============================================================================
// Campus Infrastructure - MySQL Student Repository
// File: crates/campus-infrastructure/src/database/mysql/student_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, MySqlPool};
use tracing::error;

use campus_core::domain::{NewStudent, RecordId, Student};
use campus_core::error::DomainError;
use campus_core::repositories::StudentRepository;

pub struct MySqlStudentRepository {
    pool: MySqlPool,
}

impl MySqlStudentRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct StudentRow {
    pub id: i32,
    pub name: Option<String>,
    pub roll_no: Option<String>,
    pub class: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student {
            id: row.id,
            name: row.name,
            roll_no: row.roll_no,
            class: row.class,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl StudentRepository for MySqlStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, DomainError> {
        let rows: Vec<StudentRow> = sqlx::query_as(
            "SELECT id, name, roll_no, class, created_at FROM student"
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing students: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn create(&self, student: &NewStudent) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO student (name, roll_no, class) VALUES (?, ?, ?)")
            .bind(&student.name)
            .bind(&student.roll_no)
            .bind(&student.class)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error creating student: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }

    async fn delete(&self, id: RecordId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM student WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting student {}: {}", id, e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
