//! Error types for rule installation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for install operations.
pub type InstallResult<T> = Result<T, InstallError>;

/// Errors that can occur while installing rules.
#[derive(Error, Debug)]
pub enum InstallError {
    #[error("Unknown install target: {0}")]
    UnknownTarget(String),

    #[error("No rule files found under {0}")]
    NoRules(PathBuf),

    #[error("Target '{0}' declares no destination file")]
    MissingDestination(String),

    #[error("Invalid source pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
