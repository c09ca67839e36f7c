//! Error types for the materialization pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for materialization operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while materializing rules.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Rule template not found: {0}")]
    TemplateNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
