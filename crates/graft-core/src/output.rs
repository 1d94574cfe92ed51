//! Generated output artifacts.

use serde::{Deserialize, Serialize};

/// What a generated file is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Theme,
    Component,
    Screen,
    Asset,
}

/// A generated file, handed to an external writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// File path relative to the project root.
    pub path: String,
    pub content: String,
    pub kind: FileKind,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>, kind: FileKind) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            kind,
        }
    }
}

/// A request for the asset collaborator to render and store one node image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRequest {
    pub node_id: String,
    pub image_ref: String,
    pub scale: u8,
}
