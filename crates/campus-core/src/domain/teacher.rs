// ============================================================================
// Campus Core - Teacher Record
// File: crates/campus-core/src/domain/teacher.rs
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RecordId;

/// A row of the `teacher` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: RecordId,
    pub name: Option<String>,
    pub subject: Option<String>,
    pub class: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for `POST /addteacher`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTeacher {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
}
