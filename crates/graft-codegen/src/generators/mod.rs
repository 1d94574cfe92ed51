//! Code generators for target frameworks.

mod react_native;

pub use react_native::{component_name, screen_file_stem, ReactNativeGenerator};

use graft_core::{AssetRequest, ConvertedComponent, DesignTokenSet, GeneratedFile};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Common trait for code generators.
pub trait CodeGenerator {
    /// Target framework name.
    fn framework_name(&self) -> &'static str;

    /// Generate one component source file.
    fn generate_component(&self, component: &ConvertedComponent) -> Result<String>;

    /// Generate design system code (theme configuration).
    fn generate_design_system(&self, tokens: &DesignTokenSet) -> Result<String>;

    /// Generate every file for a set of converted roots and their tokens.
    fn generate_project(&self, project: &ProjectOptions) -> Result<GeneratedProject>;
}

/// Generator settings, loadable from the `[codegen]` table of `graft.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenOptions {
    /// Emit `.tsx` instead of `.jsx`.
    pub typescript: bool,
    /// Emit routed screens instead of reusable components.
    pub screens: bool,
    pub components_dir: String,
    pub screens_dir: String,
    /// Scale requested for rendered image assets.
    pub asset_scale: u8,
    /// Also write the raw token set as `design-tokens.json`.
    pub token_json: bool,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            typescript: true,
            screens: false,
            components_dir: "components".to_string(),
            screens_dir: "app".to_string(),
            asset_scale: 2,
            token_json: true,
        }
    }
}

/// Input for project generation.
#[derive(Debug, Clone, Default)]
pub struct ProjectOptions {
    /// Converted roots, one output file each.
    pub components: Vec<ConvertedComponent>,
    /// Design tokens for the theme.
    pub tokens: Option<DesignTokenSet>,
}

/// Generated project output.
#[derive(Debug, Clone, Default)]
pub struct GeneratedProject {
    pub files: Vec<GeneratedFile>,
    /// Image renders the asset collaborator should fetch.
    pub assets: Vec<AssetRequest>,
}
