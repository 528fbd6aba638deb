//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Raw driver message, surfaced to clients unchanged.
    #[error("{0}")]
    DatabaseError(String),
}
