//! Startup error types for curtains-server

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Errors that stop the service from starting or serving
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
