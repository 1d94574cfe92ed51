//! Design token extraction.
//!
//! Scans every node of a document forest and produces a deduplicated
//! [`DesignTokenSet`](graft_core::DesignTokenSet) of colors, typography,
//! spacing and shadow effects.

mod extractor;
pub mod naming;

pub use extractor::{extract, extract_with_metadata, ExtractOptions, DEFAULT_LINE_HEIGHT_RATIO};
