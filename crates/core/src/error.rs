//! Error types shared across the workspace

use thiserror::Error;

/// Core errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Directory error: {0}")]
    Directory(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Timeout")]
    Timeout,
}

/// Convenience result alias used throughout the workspace
pub type Result<T> = std::result::Result<T, Error>;
