//! # Campus Shared
//! 
//! Configuration, error types, and telemetry shared by every campus crate.

pub mod constants;
pub mod telemetry;
pub mod config;
pub mod error;

pub use crate::config::AppConfig;
pub use crate::error::AppError;
