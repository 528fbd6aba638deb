//! Database module (MySQL bootstrap and adapters)

pub mod config;
pub mod connection;
pub mod schema;
pub mod mysql;

pub use config::DatabaseConfig;
pub use connection::{build_pool, PoolSettings};
pub use schema::{ensure_database, ensure_tables};
pub use mysql::{MySqlHealthRepository, MySqlStudentRepository, MySqlTeacherRepository};
