//! API response bodies

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
    pub uptime: f64,
}

#[derive(Debug, Serialize)]
pub struct DbProbe {
    pub db_up: i64,
}

#[derive(Debug, Serialize)]
pub struct DbHealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<DbProbe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DbHealthResponse {
    pub fn connected(db_up: i64) -> Self {
        Self {
            status: "ok",
            database: "connected",
            result: Some(DbProbe { db_up }),
            error: None,
        }
    }

    pub fn down(error: String) -> Self {
        Self {
            status: "error",
            database: "down",
            result: None,
            error: Some(error),
        }
    }
}
