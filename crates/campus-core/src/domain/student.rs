// ============================================================================
// Campus Core - Student Record
// File: crates/campus-core/src/domain/student.rs
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RecordId;

/// A row of the `student` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: RecordId,
    pub name: Option<String>,
    #[serde(rename = "rollNo")]
    pub roll_no: Option<String>,
    pub class: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for `POST /addstudent`. Fields are not validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewStudent {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "rollNo")]
    pub roll_no: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
}
