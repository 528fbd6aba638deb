use std::sync::Arc;
use std::time::Instant;

use campus_core::repositories::{HealthRepository, StudentRepository, TeacherRepository};

/// Server context injected into every handler.
///
/// Built once after startup succeeds. The repositories share one pool.
#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn StudentRepository>,
    pub teachers: Arc<dyn TeacherRepository>,
    pub health: Arc<dyn HealthRepository>,
    /// Reported by `/health` as `service`.
    pub service_name: String,
    pub started_at: Instant,
}

impl AppState {
    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
