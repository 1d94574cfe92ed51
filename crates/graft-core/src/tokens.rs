//! Design token types.
//!
//! A [`DesignTokenSet`] is the canonical interchange format between the
//! extractor and any downstream consumer; it serializes to camelCase JSON.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Rgb8;

/// Version string stamped into token set metadata.
pub const TOKEN_FORMAT_VERSION: &str = "1.0.0";

/// A named solid color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorToken {
    pub name: String,
    /// `#RRGGBB`, uppercase, never carrying alpha.
    pub hex: String,
    pub rgb: Rgb8,
    pub opacity: f64,
}

/// A named text style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyToken {
    pub name: String,
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: u16,
    pub line_height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
}

/// A spacing value in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingToken {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EffectKind {
    Shadow,
}

/// A named shadow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectToken {
    pub name: String,
    pub kind: EffectKind,
    #[serde(default)]
    pub inset: bool,
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: String,
    pub opacity: f64,
}

/// Provenance of a token set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    pub extracted_at: String,
    pub source_document_id: String,
    pub source_page_ids: Vec<String>,
    pub version: String,
}

impl TokenMetadata {
    pub fn new(
        document_id: impl Into<String>,
        page_ids: Vec<String>,
        extracted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            extracted_at: extracted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            source_document_id: document_id.into(),
            source_page_ids: page_ids,
            version: TOKEN_FORMAT_VERSION.to_string(),
        }
    }
}

/// All tokens extracted from one document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokenSet {
    pub colors: Vec<ColorToken>,
    pub typography: Vec<TypographyToken>,
    pub spacing: Vec<SpacingToken>,
    pub effects: Vec<EffectToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TokenMetadata>,
}

impl DesignTokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach provenance metadata.
    pub fn with_metadata(
        mut self,
        document_id: impl Into<String>,
        page_ids: Vec<String>,
        extracted_at: DateTime<Utc>,
    ) -> Self {
        self.metadata = Some(TokenMetadata::new(document_id, page_ids, extracted_at));
        self
    }

    /// Total number of tokens across all kinds.
    pub fn len(&self) -> usize {
        self.colors.len() + self.typography.len() + self.spacing.len() + self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
