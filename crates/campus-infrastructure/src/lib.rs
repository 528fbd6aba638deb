//! # Campus Infrastructure
//! 
//! Parameter store access, database bootstrap, and MySQL repository adapters.

pub mod database;
pub mod error;
pub mod parameters;
pub mod startup;

pub use database::{build_pool, ensure_database, ensure_tables, DatabaseConfig, PoolSettings};
pub use database::{MySqlHealthRepository, MySqlStudentRepository, MySqlTeacherRepository};
pub use error::StartupError;
pub use parameters::{ParameterFetcher, ParameterKeys, ParameterSource};
pub use startup::{MySqlStartup, RetryPolicy, Sleeper, StartupOrchestrator, StartupSteps, TokioSleeper};
