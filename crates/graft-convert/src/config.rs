//! Converter configuration.

use serde::{Deserialize, Serialize};

/// Toggles for [`convert`](crate::convert).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Convert hidden nodes instead of replacing them with placeholders.
    pub include_hidden: bool,
    /// Accepted but not acted on; wrapper groups are never collapsed.
    pub flatten_groups: bool,
    /// Classify nodes named like buttons as [`Button`](graft_core::ComponentType::Button).
    pub detect_buttons: bool,
    /// Accepted but not acted on; there is no list component type.
    pub detect_lists: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            include_hidden: false,
            flatten_groups: true,
            detect_buttons: true,
            detect_lists: true,
        }
    }
}
