//! # Campus Core
//! 
//! Record types and repository traits for the campus backend.

pub mod domain;
pub mod repositories;
pub mod error;

pub use domain::*;
pub use error::DomainError;
