//! Interface to the collaborator that fetches documents.
//!
//! The pipeline never performs I/O itself; a [`DocumentSource`] supplies a
//! complete node forest up front.

use crate::document::DocumentNode;
use crate::errors::SourceError;

/// Geometry detail requested from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeometryMode {
    #[default]
    Bounds,
    Paths,
}

/// Options for fetching a document.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Only fetch these subtrees; empty fetches the whole file.
    pub subtree_ids: Vec<String>,
    pub depth: Option<u32>,
    pub geometry: GeometryMode,
    pub version: Option<String>,
}

/// Something that can produce a document's node forest.
pub trait DocumentSource {
    fn fetch_document(
        &self,
        document_id: &str,
        options: &FetchOptions,
    ) -> Result<Vec<DocumentNode>, SourceError>;
}
