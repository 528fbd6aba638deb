//! Pass-through handlers over the `teacher` table

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use campus_core::domain::{NewTeacher, Teacher};

use crate::error::ApiError;
use crate::extract::{json_fields, parse_record_id, text_field};
use crate::response::MessageResponse;
use crate::state::AppState;

pub async fn list_teachers(State(state): State<AppState>) -> Result<Json<Vec<Teacher>>, ApiError> {
    Ok(Json(state.teachers.find_all().await?))
}

pub async fn add_teacher(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let fields = json_fields(&body);
    let payload = NewTeacher {
        name: text_field(&fields, "name"),
        subject: text_field(&fields, "subject"),
        class: text_field(&fields, "class"),
    };
    state.teachers.create(&payload).await?;
    Ok(Json(MessageResponse::new("Teacher added")))
}

pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = match parse_record_id(&raw_id) {
        Some(id) => state.teachers.delete(id).await?,
        None => false,
    };

    if deleted {
        Ok(Json(MessageResponse::new("Teacher deleted")))
    } else {
        Err(ApiError::NotFound("Teacher not found".into()))
    }
}
