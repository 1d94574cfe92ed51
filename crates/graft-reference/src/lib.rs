//! Design file reference parsing.
//!
//! Turns a pasted design file link into a document id and an optional
//! selected node, and builds canonical links back from those parts.
//!
//! # Example
//!
//! ```
//! use graft_reference::{parse, build_url, UrlOptions};
//!
//! let url = build_url("AbC123", &UrlOptions {
//!     subtree_id: Some("1:2".to_string()),
//!     ..Default::default()
//! });
//! let parsed = parse(&url).unwrap();
//! assert_eq!(parsed.document_id, "AbC123");
//! assert_eq!(parsed.subtree_id.as_deref(), Some("1:2"));
//! ```

mod lexer;
mod reference;

pub use reference::{
    build_url, canonical_node_id, extract_all_ids, parse, validate, DesignReference,
    UrlOptions, ValidationReport, HOST_MARKER, NO_SELECTION_WARNING,
};

pub use graft_core::ReferenceError;
