//! Telemetry setup

use tracing::Span;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppSettings;

/// Installs the global subscriber: `RUST_LOG` filtering, JSON lines on stdout.
pub fn init_telemetry() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json().with_target(true).with_current_span(true))
        .init();
}

/// Root span for the process; every event inside it carries `service` and `env`.
pub fn service_span(app: &AppSettings) -> Span {
    tracing::info_span!("app", service = %app.name, env = %app.env)
}
