//! Core types shared across the Graft pipeline.
//!
//! This crate provides the foundational types used by every other graft crate:
//! - The design tool's scene graph ([`DocumentNode`] and friends)
//! - Design tokens extracted from a document
//! - The framework-agnostic converted component tree
//! - Generated output files
//! - Error types

pub mod component;
pub mod document;
pub mod errors;
pub mod output;
pub mod source;
pub mod tokens;
pub mod types;
pub mod walk;

pub use component::*;
pub use document::*;
pub use errors::*;
pub use output::*;
pub use source::*;
pub use tokens::*;
pub use types::*;
pub use walk::walk;
