//! Error types for uncompose

use thiserror::Error;

/// Result type for uncompose operations
pub type Result<T> = std::result::Result<T, UncomposeError>;

/// Uncompose error types
#[derive(Error, Debug)]
pub enum UncomposeError {
    #[error("Compose file parse error: {0}")]
    ComposeParse(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    #[error("Service index out of bounds: {0}")]
    ServiceIndexOutOfBounds(i64),

    #[error("Not implemented: {0}")]
    Unimplemented(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
