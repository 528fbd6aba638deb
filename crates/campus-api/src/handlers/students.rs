// ============================================================================
// Campus API - Student Handlers
// File: crates/campus-api/src/handlers/students.rs
// ============================================================================
//! Pass-through handlers over the `student` table

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use campus_core::domain::{NewStudent, Student};

use crate::error::ApiError;
use crate::extract::{json_fields, parse_record_id, text_field};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET / and GET /student
pub async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>, ApiError> {
    Ok(Json(state.students.find_all().await?))
}

/// POST /addstudent - no validation, missing fields are stored as NULL
pub async fn add_student(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let fields = json_fields(&body);
    let payload = NewStudent {
        name: text_field(&fields, "name"),
        roll_no: text_field(&fields, "rollNo"),
        class: text_field(&fields, "class"),
    };
    state.students.create(&payload).await?;
    Ok(Json(MessageResponse::new("Student added")))
}

/// DELETE /student/{id}
pub async fn delete_student(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = match parse_record_id(&raw_id) {
        Some(id) => state.students.delete(id).await?,
        None => false,
    };

    if deleted {
        Ok(Json(MessageResponse::new("Student deleted")))
    } else {
        Err(ApiError::NotFound("Student not found".into()))
    }
}
