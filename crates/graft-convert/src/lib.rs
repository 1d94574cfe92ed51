//! Conversion of design document nodes into a framework-agnostic component
//! tree.
//!
//! ```
//! use graft_convert::{convert, ConverterConfig};
//! use graft_core::{ComponentType, DocumentNode, NodeType};
//!
//! let node = DocumentNode::new("1:1", "Primary Button", NodeType::Frame);
//! let component = convert(&node, &ConverterConfig::default());
//! assert_eq!(component.component_type, ComponentType::Button);
//! ```

pub mod classify;
mod config;
mod converter;

pub use classify::{Classifier, Rule, BUTTON_KEYWORDS};
pub use config::ConverterConfig;
pub use converter::{convert, Converter, DEFAULT_SHADOW_OPACITY, DEFAULT_SHADOW_RADIUS};
