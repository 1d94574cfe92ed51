//! Code generation from converted design components.
//!
//! Targets React Native with NativeWind: design tokens become a
//! `tailwind.config.js` theme, converted component trees become JSX whose
//! styling is expressed as utility classes wherever a fixed table has an
//! entry, with exact inline styles for everything else.
//!
//! # Example
//!
//! ```
//! use graft_codegen::{CodeGenerator, ReactNativeGenerator};
//! use graft_core::{ComponentType, ConvertedComponent};
//!
//! let generator = ReactNativeGenerator::new();
//! let root = ConvertedComponent::new("1:1", "Card", ComponentType::Frame);
//! let code = generator.generate_component(&root)?;
//! assert!(code.contains("export function Card()"));
//! # Ok::<(), graft_codegen::CodegenError>(())
//! ```

pub mod error;
pub mod generators;
mod js;
pub mod jsx;
pub mod style;
pub mod theme;

pub use error::{CodegenError, Result};
pub use generators::{
    component_name, screen_file_stem, CodeGenerator, CodegenOptions, GeneratedProject,
    ProjectOptions, ReactNativeGenerator,
};
pub use jsx::{emit_component, Primitive};
pub use style::{map_styles, StyleMapping};
pub use theme::emit_theme;
