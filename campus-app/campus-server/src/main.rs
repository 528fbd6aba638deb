use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{error, info, Instrument};

use campus_api::{build_router, AppState};
use campus_infrastructure::parameters::{EnvParameterSource, ParameterSource, SsmParameterSource};
use campus_infrastructure::{
    ensure_tables, MySqlHealthRepository, MySqlStartup, MySqlStudentRepository, MySqlTeacherRepository,
    ParameterFetcher, ParameterKeys, PoolSettings, RetryPolicy, Sleeper, StartupError, StartupOrchestrator,
    StartupSteps, TokioSleeper,
};
use campus_shared::config::{AppConfig, ParameterBackend};
use campus_shared::telemetry::{init_telemetry, service_span};
use campus_shared::AppError;

#[derive(Debug, Error)]
enum ServerError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] AppError),

    #[error("Database startup failed: {0}")]
    Startup(#[source] StartupError),

    #[error("Table initialization failed: {0}")]
    Tables(#[source] StartupError),

    #[error("Invalid listen address: {0}")]
    Addr(#[from] AddrParseError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Process exit status: 0 after a clean shutdown, 1 for any failure.
fn exit_status(result: &Result<(), ServerError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let started_at = Instant::now();

    // Load .env
    dotenvy::dotenv().ok();

    init_telemetry();

    info!("Campus backend starting...");

    let result = match AppConfig::load() {
        Ok(config) => {
            let span = service_span(&config.app);
            serve(config, started_at).instrument(span).await
        }
        Err(e) => Err(ServerError::from(e)),
    };

    if let Err(e) = &result {
        error!("{}", e);
    }
    ExitCode::from(exit_status(&result))
}

async fn serve(config: AppConfig, started_at: Instant) -> Result<(), ServerError> {
    let source: Arc<dyn ParameterSource> = match config.parameters.backend {
        ParameterBackend::Ssm => Arc::new(SsmParameterSource::from_env(config.parameters.region.clone()).await),
        ParameterBackend::Env => Arc::new(EnvParameterSource::new()),
    };
    info!(backend = ?config.parameters.backend, "Parameter source ready");

    let fetcher = ParameterFetcher::new(source, ParameterKeys::from(&config.parameters));
    let orchestrator = StartupOrchestrator::new(
        MySqlStartup::new(fetcher, PoolSettings::from(&config.database)),
        TokioSleeper,
        RetryPolicy::from(&config.startup),
    );

    // No route is reachable until the pool exists and the tables are in place.
    let pool = connect(&orchestrator).await?;
    ensure_tables(&pool).await.map_err(ServerError::Tables)?;

    let state = AppState {
        students: Arc::new(MySqlStudentRepository::new(pool.clone())),
        teachers: Arc::new(MySqlTeacherRepository::new(pool.clone())),
        health: Arc::new(MySqlHealthRepository::new(pool)),
        service_name: config.app.name.clone(),
        started_at,
    };

    let app = build_router(state, Duration::from_secs(config.app.request_timeout_secs));

    let host: IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Campus backend stopped");
    Ok(())
}

async fn connect<S: StartupSteps, Z: Sleeper>(
    orchestrator: &StartupOrchestrator<S, Z>,
) -> Result<S::Pool, ServerError> {
    orchestrator.run().await.map_err(ServerError::Startup)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use campus_infrastructure::DatabaseConfig;

    /// Parameter store that never answers.
    struct UnreachableStore;

    #[async_trait]
    impl StartupSteps for UnreachableStore {
        type Pool = ();

        async fn fetch_config(&self) -> Result<DatabaseConfig, StartupError> {
            Err(StartupError::ConfigError("parameter store unreachable".into()))
        }

        async fn ensure_database(&self, _config: &DatabaseConfig) -> Result<(), StartupError> {
            Ok(())
        }

        async fn build_pool(&self, _config: &DatabaseConfig) -> Result<(), StartupError> {
            Ok(())
        }
    }

    struct NoWait;

    #[async_trait]
    impl Sleeper for NoWait {
        async fn sleep(&self, _duration: Duration) {}
    }

    #[tokio::test]
    async fn test_exhausted_startup_exits_non_zero() {
        let orchestrator = StartupOrchestrator::new(
            UnreachableStore,
            NoWait,
            RetryPolicy::new(2, Duration::from_millis(3000)),
        );

        let result = connect(&orchestrator).await;
        assert!(matches!(
            result,
            Err(ServerError::Startup(StartupError::Exhausted { attempts: 2, .. }))
        ));
        assert_eq!(exit_status(&result), 1);
    }

    #[test]
    fn test_clean_shutdown_exits_zero() {
        assert_eq!(exit_status(&Ok(())), 0);
    }

    #[test]
    fn test_every_failure_exits_non_zero() {
        let failures = [
            ServerError::Tables(StartupError::SchemaError("syntax error".into())),
            ServerError::Io(std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken")),
            ServerError::from("not-an-ip".parse::<IpAddr>().unwrap_err()),
        ];
        for failure in failures {
            assert_eq!(exit_status(&Err(failure)), 1);
        }
    }
}
