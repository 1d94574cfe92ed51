//! Parsing and building design file references.

use graft_core::ReferenceError;
use serde::Serialize;

use crate::lexer::{name_segment, node_id_param, percent_decode, query_pairs, route_segment};

/// Host every accepted reference must mention.
pub const HOST_MARKER: &str = "figma.com";

const CANONICAL_BASE: &str = "https://www.figma.com/design";

/// Warning attached to references that do not select a frame.
pub const NO_SELECTION_WARNING: &str = "No frame selected - importing all frames";

/// A parsed design file reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignReference {
    pub document_id: String,
    /// Canonical colon-separated node id of the selected subtree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtree_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
}

/// Result of [`validate`]; never an error, always a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<DesignReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub warnings: Vec<String>,
}

/// Components for [`build_url`].
#[derive(Debug, Clone, Default)]
pub struct UrlOptions {
    pub subtree_id: Option<String>,
    pub document_name: Option<String>,
    pub page_id: Option<String>,
}

/// Parse a design file reference into its components.
///
/// A missing node id is not an error; only an empty string, a foreign host,
/// or a missing file id are rejected.
pub fn parse(reference: &str) -> Result<DesignReference, ReferenceError> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(ReferenceError::Empty);
    }
    if !reference.contains(HOST_MARKER) {
        return Err(ReferenceError::UnrecognizedHost);
    }

    let without_fragment = reference.split('#').next().unwrap_or(reference);
    let (path, query) = without_fragment
        .split_once('?')
        .unwrap_or((without_fragment, ""));

    let (after_id, document_id) = path
        .match_indices('/')
        .find_map(|(i, _)| route_segment(&path[i..]).ok())
        .ok_or(ReferenceError::MissingDocumentId)?;

    let document_name = name_segment(after_id)
        .ok()
        .and_then(|(_, name)| name)
        .map(|name| percent_decode(name).replace('-', " "))
        .filter(|name| !name.trim().is_empty());

    let mut subtree_id = None;
    let mut page_id = None;
    for (key, value) in query_pairs(query) {
        match key {
            "node-id" if subtree_id.is_none() => {
                subtree_id = Some(canonical_node_id(value)).filter(|id| !id.is_empty());
            }
            "page-id" if page_id.is_none() => {
                if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
                    page_id = Some(value.to_string());
                }
            }
            _ => {}
        }
    }

    Ok(DesignReference {
        document_id: document_id.to_string(),
        subtree_id,
        document_name,
        page_id,
    })
}

/// Validate a reference, reporting errors and advisory warnings as data.
pub fn validate(reference: &str) -> ValidationReport {
    match parse(reference) {
        Ok(parsed) => {
            let mut warnings = Vec::new();
            if parsed.subtree_id.is_none() {
                warnings.push(NO_SELECTION_WARNING.to_string());
            }
            ValidationReport {
                valid: true,
                reference: Some(parsed),
                error: None,
                warnings,
            }
        }
        Err(e) => ValidationReport {
            valid: false,
            reference: None,
            error: Some(e.to_string()),
            warnings: Vec::new(),
        },
    }
}

/// Every node id mentioned in `text`, canonicalized, in order of appearance.
///
/// Useful when a user pastes several links at once.
pub fn extract_all_ids(text: &str) -> Vec<String> {
    text.match_indices("node-id=")
        .filter_map(|(i, _)| node_id_param(&text[i..]).ok())
        .map(|(_, raw)| canonical_node_id(raw))
        .filter(|id| !id.is_empty())
        .collect()
}

/// Build the canonical URL for a document (and optionally a node).
pub fn build_url(document_id: &str, options: &UrlOptions) -> String {
    let name = options
        .document_name
        .as_deref()
        .map(url_slug)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Untitled".to_string());

    let mut url = format!("{}/{}/{}", CANONICAL_BASE, document_id, name);

    let mut params = Vec::new();
    if let Some(ref id) = options.subtree_id {
        params.push(format!("node-id={}", id.replace(':', "-")));
    }
    if let Some(ref page) = options.page_id {
        params.push(format!("page-id={}", page));
    }
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }
    url
}

/// Canonical node id: escapes decoded, dash form converted to colon form.
pub fn canonical_node_id(raw: &str) -> String {
    percent_decode(raw).trim().replace('-', ":")
}

fn url_slug(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
