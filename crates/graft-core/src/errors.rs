//! Error types for the Graft pipeline.

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum GraftError {
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors from parsing a design file reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("A design file URL is required")]
    Empty,

    #[error("Not a recognized design file URL (expected a figma.com link)")]
    UnrecognizedHost,

    #[error("Could not find a file id in the URL (expected /file/<id> or /design/<id>)")]
    MissingDocumentId,
}

/// Errors reported by a document source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Document {id} not found")]
    NotFound { id: String },

    #[error("Node {id} not found in document {document_id}")]
    NodeNotFound { document_id: String, id: String },

    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed document payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
