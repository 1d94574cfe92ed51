//! The import pipeline: fetch, extract tokens, convert, generate, write.

use std::fs;
use std::path::{Path, PathBuf};

use graft_codegen::{CodeGenerator, GeneratedProject, ProjectOptions, ReactNativeGenerator};
use graft_convert::Converter;
use graft_core::{
    find_node, DesignTokenSet, DocumentNode, DocumentSource, FetchOptions, GeneratedFile, NodeType,
    SourceError,
};
use graft_reference::{ValidationReport, NO_SELECTION_WARNING};
use graft_tokens::extract_with_metadata;
use tracing::{info, warn};

use crate::config::GraftConfig;
use crate::error::{CliError, Result};

/// What to import from a source.
#[derive(Debug, Clone, Default)]
pub struct ImportRequest {
    pub document_id: String,
    /// Selected subtrees; empty imports every top-level frame.
    pub subtree_ids: Vec<String>,
    /// Page ids recorded in token metadata.
    pub page_ids: Vec<String>,
}

/// Extract design tokens from every page of a document.
///
/// The subtree selection in `request` does not narrow extraction.
pub fn extract_tokens(
    source: &dyn DocumentSource,
    request: &ImportRequest,
    config: &GraftConfig,
) -> Result<DesignTokenSet> {
    let roots = source.fetch_document(&request.document_id, &FetchOptions::default())?;
    Ok(tokens_for(&roots, request, config))
}

/// Run the whole import and return the generated project.
///
/// Tokens are extracted from the whole document; one component (or screen)
/// is generated per selected subtree, or per top-level frame when nothing
/// is selected.
pub fn run(
    source: &dyn DocumentSource,
    request: &ImportRequest,
    config: &GraftConfig,
) -> Result<GeneratedProject> {
    let roots = source.fetch_document(&request.document_id, &FetchOptions::default())?;
    let tokens = tokens_for(&roots, request, config);

    let selected = if request.subtree_ids.is_empty() {
        warn!("{}", NO_SELECTION_WARNING);
        component_roots(&roots)
    } else {
        select_subtrees(&roots, request)?
    };

    let converter = Converter::new(&config.convert);
    let components = selected
        .into_iter()
        .map(|node| converter.convert(node))
        .collect();

    let generator = ReactNativeGenerator::with_options(config.codegen.clone());
    let project = generator.generate_project(&ProjectOptions {
        components,
        tokens: Some(tokens),
    })?;

    info!(
        document = %request.document_id,
        files = project.files.len(),
        "import complete"
    );
    Ok(project)
}

/// Turn a failed validation into an error.
pub fn ensure_valid(report: &ValidationReport) -> Result<()> {
    if report.valid {
        return Ok(());
    }
    Err(CliError::InvalidReference(
        report.error.clone().unwrap_or_else(|| "unknown error".to_string()),
    ))
}

/// Write generated files below `out_dir`, creating directories as needed.
pub fn write_files(files: &[GeneratedFile], out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = out_dir.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &file.content)?;
        info!(path = %path.display(), kind = ?file.kind, "wrote file");
        written.push(path);
    }
    Ok(written)
}

fn tokens_for(roots: &[DocumentNode], request: &ImportRequest, config: &GraftConfig) -> DesignTokenSet {
    extract_with_metadata(
        roots,
        &config.extract,
        &request.document_id,
        request.page_ids.clone(),
    )
}

fn select_subtrees<'a>(
    roots: &'a [DocumentNode],
    request: &ImportRequest,
) -> Result<Vec<&'a DocumentNode>> {
    request
        .subtree_ids
        .iter()
        .map(|id| {
            find_node(roots, id).ok_or_else(|| {
                CliError::from(SourceError::NodeNotFound {
                    document_id: request.document_id.clone(),
                    id: id.clone(),
                })
            })
        })
        .collect()
}

/// Pages are containers, not screens; their children are the frames to convert.
fn component_roots(roots: &[DocumentNode]) -> Vec<&DocumentNode> {
    roots
        .iter()
        .flat_map(|root| match root.node_type {
            NodeType::Document | NodeType::Canvas => root.children.iter().collect::<Vec<_>>(),
            _ => vec![root],
        })
        .collect()
}
