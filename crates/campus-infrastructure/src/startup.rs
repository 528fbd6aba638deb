// ============================================================================
// Campus Infrastructure - Startup Orchestrator
// File: crates/campus-infrastructure/src/startup.rs
// ============================================================================
//! Bounded retry around fetch -> ensure database -> build pool.
//!
//! Every attempt starts from scratch: configuration is re-fetched and nothing
//! from a failed attempt is reused. Between failed attempts the orchestrator
//! waits a fixed delay through an injected [`Sleeper`].

use std::time::Duration;

use async_trait::async_trait;
use campus_shared::config::StartupSettings;
use campus_shared::constants::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY_MS};
use sqlx::MySqlPool;
use tracing::{error, info, warn};

use crate::database::{build_pool, ensure_database, DatabaseConfig, PoolSettings};
use crate::error::StartupError;
use crate::parameters::ParameterFetcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupState {
    /// 1-based attempt number.
    Attempting(u32),
    Succeeded,
    FailedFatal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    Success,
    Failure,
}

/// Next state plus the wait required before entering it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: StartupState,
    pub delay: Option<Duration>,
}

/// Fixed-delay retry bound. No growth, no jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// `max_attempts` below 1 is raised to 1.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn next(&self, attempt: u32, outcome: AttemptOutcome) -> Transition {
        match outcome {
            AttemptOutcome::Success => Transition {
                next: StartupState::Succeeded,
                delay: None,
            },
            AttemptOutcome::Failure if attempt >= self.max_attempts => Transition {
                next: StartupState::FailedFatal,
                delay: None,
            },
            AttemptOutcome::Failure => Transition {
                next: StartupState::Attempting(attempt + 1),
                delay: Some(self.delay),
            },
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, Duration::from_millis(DEFAULT_RETRY_DELAY_MS))
    }
}

impl From<&StartupSettings> for RetryPolicy {
    fn from(settings: &StartupSettings) -> Self {
        Self::new(settings.max_attempts, Duration::from_millis(settings.retry_delay_ms))
    }
}

#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// The three steps of one connection attempt.
#[async_trait]
pub trait StartupSteps: Send + Sync {
    type Pool: Send;

    async fn fetch_config(&self) -> Result<DatabaseConfig, StartupError>;
    async fn ensure_database(&self, config: &DatabaseConfig) -> Result<(), StartupError>;
    async fn build_pool(&self, config: &DatabaseConfig) -> Result<Self::Pool, StartupError>;
}

/// Production steps: parameter store credentials, MySQL server.
pub struct MySqlStartup {
    fetcher: ParameterFetcher,
    pool_settings: PoolSettings,
}

impl MySqlStartup {
    pub fn new(fetcher: ParameterFetcher, pool_settings: PoolSettings) -> Self {
        Self { fetcher, pool_settings }
    }
}

#[async_trait]
impl StartupSteps for MySqlStartup {
    type Pool = MySqlPool;

    async fn fetch_config(&self) -> Result<DatabaseConfig, StartupError> {
        self.fetcher.fetch().await
    }

    async fn ensure_database(&self, config: &DatabaseConfig) -> Result<(), StartupError> {
        ensure_database(config, &self.pool_settings).await
    }

    async fn build_pool(&self, config: &DatabaseConfig) -> Result<MySqlPool, StartupError> {
        build_pool(config, &self.pool_settings).await
    }
}

pub struct StartupOrchestrator<S, Z = TokioSleeper> {
    steps: S,
    sleeper: Z,
    policy: RetryPolicy,
}

impl<S: StartupSteps, Z: Sleeper> StartupOrchestrator<S, Z> {
    pub fn new(steps: S, sleeper: Z, policy: RetryPolicy) -> Self {
        Self { steps, sleeper, policy }
    }

    async fn attempt(&self) -> Result<S::Pool, StartupError> {
        let config = self.steps.fetch_config().await?;
        self.steps.ensure_database(&config).await?;
        self.steps.build_pool(&config).await
    }

    /// Runs attempts until one succeeds or the bound is reached.
    ///
    /// The final failure is wrapped in [`StartupError::Exhausted`].
    pub async fn run(&self) -> Result<S::Pool, StartupError> {
        let max_attempts = self.policy.max_attempts();
        let mut attempt = 1;

        loop {
            info!(attempt, max_attempts, "Establishing database connection");

            let err = match self.attempt().await {
                Ok(pool) => {
                    let state = self.policy.next(attempt, AttemptOutcome::Success).next;
                    info!(attempt, ?state, "Database connection established");
                    return Ok(pool);
                }
                Err(err) => err,
            };

            let transition = self.policy.next(attempt, AttemptOutcome::Failure);
            let StartupState::Attempting(next) = transition.next else {
                error!(attempt, error = %err, "Database connection attempts exhausted");
                return Err(StartupError::Exhausted {
                    attempts: attempt,
                    source: Box::new(err),
                });
            };

            let delay = transition.delay.unwrap_or_default();
            warn!(
                attempt,
                max_attempts,
                error = %err,
                delay_ms = delay.as_millis() as u64,
                "Database connection attempt failed, retrying"
            );
            self.sleeper.sleep(delay).await;
            attempt = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    #[derive(Debug, Clone, Copy)]
    enum Step {
        Fetch,
        Schema,
        Pool,
    }

    /// Scripted steps: each attempt either succeeds or fails at one step.
    struct ScriptedSteps {
        failures: Mutex<VecDeque<Option<Step>>>,
        fetches: AtomicU32,
        schema_calls: AtomicU32,
        pool_calls: AtomicU32,
    }

    impl ScriptedSteps {
        fn new(script: Vec<Option<Step>>) -> Self {
            Self {
                failures: Mutex::new(script.into()),
                fetches: AtomicU32::new(0),
                schema_calls: AtomicU32::new(0),
                pool_calls: AtomicU32::new(0),
            }
        }

        fn current(&self) -> Option<Step> {
            self.failures.lock().unwrap().front().copied().flatten()
        }

        fn finish_attempt(&self) {
            self.failures.lock().unwrap().pop_front();
        }
    }

    #[async_trait]
    impl StartupSteps for ScriptedSteps {
        type Pool = &'static str;

        async fn fetch_config(&self) -> Result<DatabaseConfig, StartupError> {
            let n = self.fetches.fetch_add(1, Ordering::SeqCst) + 1;
            if let Some(Step::Fetch) = self.current() {
                self.finish_attempt();
                return Err(StartupError::ConfigError(format!("store unreachable #{}", n)));
            }
            DatabaseConfig::new("h".into(), "u".into(), "p".into(), format!("db{}", n))
        }

        async fn ensure_database(&self, _config: &DatabaseConfig) -> Result<(), StartupError> {
            self.schema_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(Step::Schema) = self.current() {
                self.finish_attempt();
                return Err(StartupError::SchemaError("connection refused".into()));
            }
            Ok(())
        }

        async fn build_pool(&self, config: &DatabaseConfig) -> Result<&'static str, StartupError> {
            self.pool_calls.fetch_add(1, Ordering::SeqCst);
            let step = self.current();
            self.finish_attempt();
            match step {
                Some(Step::Pool) => Err(StartupError::PoolError(format!("rejected {}", config.name()))),
                _ => Ok("pool"),
            }
        }
    }

    #[derive(Default)]
    struct RecordingSleeper {
        slept: Mutex<Vec<Duration>>,
    }

    #[async_trait]
    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.slept.lock().unwrap().push(duration);
        }
    }

    fn orchestrator(script: Vec<Option<Step>>) -> StartupOrchestrator<ScriptedSteps, RecordingSleeper> {
        StartupOrchestrator::new(
            ScriptedSteps::new(script),
            RecordingSleeper::default(),
            RetryPolicy::default(),
        )
    }

    #[test]
    fn test_policy_transitions() {
        let policy = RetryPolicy::new(3, Duration::from_millis(3000));
        assert_eq!(
            policy.next(1, AttemptOutcome::Failure),
            Transition {
                next: StartupState::Attempting(2),
                delay: Some(Duration::from_millis(3000)),
            }
        );
        assert_eq!(
            policy.next(2, AttemptOutcome::Success),
            Transition { next: StartupState::Succeeded, delay: None }
        );
        assert_eq!(
            policy.next(3, AttemptOutcome::Failure),
            Transition { next: StartupState::FailedFatal, delay: None }
        );
    }

    #[test]
    fn test_zero_attempts_is_raised_to_one() {
        let policy = RetryPolicy::new(0, Duration::ZERO);
        assert_eq!(policy.max_attempts(), 1);
        assert_eq!(policy.next(1, AttemptOutcome::Failure).next, StartupState::FailedFatal);
    }

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 10);
        assert_eq!(policy.delay(), Duration::from_millis(3000));
    }

    #[tokio::test]
    async fn test_first_attempt_success_never_sleeps() {
        let orchestrator = orchestrator(vec![None]);
        assert_eq!(orchestrator.run().await.unwrap(), "pool");
        assert!(orchestrator.sleeper.slept.lock().unwrap().is_empty());
        assert_eq!(orchestrator.steps.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_three_failures_then_success() {
        let orchestrator = orchestrator(vec![
            Some(Step::Schema),
            Some(Step::Fetch),
            Some(Step::Pool),
            None,
        ]);

        assert_eq!(orchestrator.run().await.unwrap(), "pool");

        let slept = orchestrator.sleeper.slept.lock().unwrap().clone();
        assert_eq!(slept, vec![Duration::from_millis(3000); 3]);
        // Configuration is re-fetched on every attempt.
        assert_eq!(orchestrator.steps.fetches.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_failed_step_aborts_rest_of_attempt() {
        let orchestrator = orchestrator(vec![Some(Step::Fetch), None]);
        orchestrator.run().await.unwrap();
        // The failed fetch skipped schema and pool for attempt 1.
        assert_eq!(orchestrator.steps.schema_calls.load(Ordering::SeqCst), 1);
        assert_eq!(orchestrator.steps.pool_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_exhaustion_propagates_last_error() {
        let orchestrator = StartupOrchestrator::new(
            ScriptedSteps::new(vec![Some(Step::Fetch); 5]),
            RecordingSleeper::default(),
            RetryPolicy::new(3, Duration::from_millis(3000)),
        );

        match orchestrator.run().await {
            Err(StartupError::Exhausted { attempts, source }) => {
                assert_eq!(attempts, 3);
                assert!(matches!(*source, StartupError::ConfigError(ref msg) if msg.ends_with("#3")));
            }
            other => panic!("expected exhaustion, got {:?}", other),
        }

        // No attempt after the last one, and no sleep after it either.
        assert_eq!(orchestrator.steps.fetches.load(Ordering::SeqCst), 3);
        assert_eq!(orchestrator.sleeper.slept.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_single_attempt_policy_fails_without_sleeping() {
        let orchestrator = StartupOrchestrator::new(
            ScriptedSteps::new(vec![Some(Step::Pool), None]),
            RecordingSleeper::default(),
            RetryPolicy::new(0, Duration::from_millis(3000)),
        );

        match orchestrator.run().await {
            Err(StartupError::Exhausted { attempts, source }) => {
                assert_eq!(attempts, 1);
                assert!(matches!(*source, StartupError::PoolError(_)));
            }
            other => panic!("expected exhaustion, got {:?}", other),
        }
        assert_eq!(orchestrator.steps.pool_calls.load(Ordering::SeqCst), 1);
        assert!(orchestrator.sleeper.slept.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_sleeper_waits_fixed_delay() {
        let orchestrator = StartupOrchestrator::new(
            ScriptedSteps::new(vec![Some(Step::Schema), Some(Step::Schema), None]),
            TokioSleeper,
            RetryPolicy::default(),
        );

        let started = tokio::time::Instant::now();
        orchestrator.run().await.unwrap();
        assert_eq!(started.elapsed(), Duration::from_millis(6000));
    }
}
