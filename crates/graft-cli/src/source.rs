//! A [`DocumentSource`] backed by an exported JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use graft_core::{find_node, Document, DocumentNode, DocumentSource, FetchOptions, SourceError};
use tracing::{debug, warn};

/// Reads a file export: either a whole file payload (`{ "document": ... }`)
/// or a single node.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

/// The parsed contents of an export.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub name: Option<String>,
    /// Top-level pages, or the single exported node.
    pub roots: Vec<DocumentNode>,
    pub page_ids: Vec<String>,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File stem, used as the document id when none is given.
    pub fn default_document_id(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string())
    }

    pub fn load(&self) -> Result<LoadedDocument, SourceError> {
        let data = fs::read_to_string(&self.path)?;
        let value: serde_json::Value = serde_json::from_str(&data)?;

        if value.get("document").is_some() {
            let document: Document = serde_json::from_value(value)?;
            let page_ids = document.page_ids();
            Ok(LoadedDocument {
                name: Some(document.name).filter(|n| !n.is_empty()),
                roots: document.document.children,
                page_ids,
            })
        } else {
            let node: DocumentNode = serde_json::from_value(value)?;
            Ok(LoadedDocument {
                name: None,
                roots: vec![node],
                page_ids: Vec::new(),
            })
        }
    }
}

impl DocumentSource for FileSource {
    fn fetch_document(
        &self,
        document_id: &str,
        options: &FetchOptions,
    ) -> Result<Vec<DocumentNode>, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::NotFound {
                id: document_id.to_string(),
            });
        }
        if options.version.is_some() {
            warn!("file exports carry a single version; ignoring requested version");
        }

        let loaded = self.load()?;
        let mut roots = if options.subtree_ids.is_empty() {
            loaded.roots
        } else {
            options
                .subtree_ids
                .iter()
                .map(|id| {
                    find_node(&loaded.roots, id)
                        .cloned()
                        .ok_or_else(|| SourceError::NodeNotFound {
                            document_id: document_id.to_string(),
                            id: id.clone(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        if let Some(depth) = options.depth {
            for root in &mut roots {
                truncate(root, depth);
            }
        }

        debug!(
            path = %self.path.display(),
            roots = roots.len(),
            "fetched document from file"
        );
        Ok(roots)
    }
}

/// Drop descendants deeper than `depth` levels below `node`.
fn truncate(node: &mut DocumentNode, depth: u32) {
    if depth == 0 {
        node.children.clear();
        return;
    }
    for child in &mut node.children {
        truncate(child, depth - 1);
    }
}
