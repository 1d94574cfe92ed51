//! Error type for the command-line pipeline.

use graft_codegen::CodegenError;
use graft_core::{GraftError, ReferenceError, SourceError};
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Everything that can stop an import.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Graft(#[from] GraftError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),

    #[error("Invalid design reference: {0}")]
    InvalidReference(String),
}

impl From<ReferenceError> for CliError {
    fn from(e: ReferenceError) -> Self {
        Self::Graft(e.into())
    }
}

impl From<SourceError> for CliError {
    fn from(e: SourceError) -> Self {
        Self::Graft(e.into())
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Graft(e.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Graft(e.into())
    }
}
