//! Token extraction.
//!
//! Walks the whole document forest once, collecting candidate tokens per
//! node, then deduplicates each kind with first-occurrence-wins semantics.

use std::collections::HashSet;
use std::hash::Hash;

use chrono::Utc;
use graft_core::{
    walk, ColorToken, DesignTokenSet, DocumentNode, EffectKind, EffectToken, EffectType,
    NodeType, SpacingToken, TypographyToken,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::naming::{color_name, effect_name, spacing_name, typography_name};

/// Which token kinds to extract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub colors: bool,
    pub typography: bool,
    pub spacing: bool,
    pub effects: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            colors: true,
            typography: true,
            spacing: true,
            effects: true,
        }
    }
}

/// Line height used when a text style does not specify one, as a multiple
/// of the font size.
pub const DEFAULT_LINE_HEIGHT_RATIO: f64 = 1.2;

const DEFAULT_FONT_WEIGHT: u16 = 400;

/// Extract a deduplicated token set from every node of `roots`.
pub fn extract(roots: &[DocumentNode], options: &ExtractOptions) -> DesignTokenSet {
    let mut extractor = TokenExtractor::new(options);
    walk(roots, &mut |node: &DocumentNode, _depth: usize| extractor.visit(node));
    let tokens = extractor.finish();

    debug!(
        colors = tokens.colors.len(),
        typography = tokens.typography.len(),
        spacing = tokens.spacing.len(),
        effects = tokens.effects.len(),
        "extracted design tokens"
    );

    tokens
}

/// Extract tokens and stamp provenance metadata with the current time.
pub fn extract_with_metadata(
    roots: &[DocumentNode],
    options: &ExtractOptions,
    document_id: &str,
    page_ids: Vec<String>,
) -> DesignTokenSet {
    extract(roots, options).with_metadata(document_id, page_ids, Utc::now())
}

struct TokenExtractor<'a> {
    options: &'a ExtractOptions,
    colors: Vec<ColorToken>,
    typography: Vec<TypographyToken>,
    spacing: Vec<SpacingToken>,
    effects: Vec<EffectToken>,
}

impl<'a> TokenExtractor<'a> {
    fn new(options: &'a ExtractOptions) -> Self {
        Self {
            options,
            colors: Vec::new(),
            typography: Vec::new(),
            spacing: Vec::new(),
            effects: Vec::new(),
        }
    }

    fn visit(&mut self, node: &DocumentNode) {
        if self.options.colors {
            self.collect_colors(node);
        }
        if self.options.typography {
            self.collect_typography(node);
        }
        if self.options.spacing {
            self.collect_spacing(node);
        }
        if self.options.effects {
            self.collect_effect(node);
        }
    }

    fn collect_colors(&mut self, node: &DocumentNode) {
        for paint in &node.fills {
            let Some(color) = paint.solid_color() else {
                continue;
            };
            let hex = color.to_hex();
            self.colors.push(ColorToken {
                name: color_name(&node.name, &hex),
                rgb: color.into(),
                hex,
                opacity: paint.effective_opacity(),
            });
        }
    }

    fn collect_typography(&mut self, node: &DocumentNode) {
        if node.node_type != NodeType::Text {
            return;
        }
        let Some(style) = node.style.as_ref() else {
            return;
        };
        let (Some(family), Some(size)) = (style.font_family.as_ref(), style.font_size) else {
            return;
        };

        let weight = style
            .font_weight
            .map(|w| w.round() as u16)
            .unwrap_or(DEFAULT_FONT_WEIGHT);

        self.typography.push(TypographyToken {
            name: typography_name(size, weight),
            font_family: family.clone(),
            font_size: size,
            font_weight: weight,
            line_height: style
                .line_height_px
                .unwrap_or(size * DEFAULT_LINE_HEIGHT_RATIO),
            letter_spacing: style.letter_spacing,
        });
    }

    fn collect_spacing(&mut self, node: &DocumentNode) {
        let candidates = [
            node.padding_top,
            node.padding_right,
            node.padding_bottom,
            node.padding_left,
            node.item_spacing,
        ];

        let mut seen = HashSet::new();
        for value in candidates.into_iter().flatten() {
            if value > 0.0 && seen.insert(float_key(value)) {
                self.spacing.push(SpacingToken {
                    name: spacing_name(value),
                    value,
                });
            }
        }
    }

    fn collect_effect(&mut self, node: &DocumentNode) {
        let Some(effect) = node.effects.iter().find(|e| e.is_shadow()) else {
            return;
        };
        let inset = effect.effect_type == EffectType::InnerShadow;
        let offset = effect.offset.unwrap_or_default();
        let color = effect.color.unwrap_or_default();

        self.effects.push(EffectToken {
            name: effect_name(&node.name, inset),
            kind: EffectKind::Shadow,
            inset,
            x: offset.x,
            y: offset.y,
            blur: effect.radius.unwrap_or(0.0),
            spread: effect.spread.unwrap_or(0.0),
            color: color.to_hex(),
            opacity: color.a,
        });
    }

    fn finish(self) -> DesignTokenSet {
        let mut spacing = dedup_by_key(self.spacing, |t| float_key(t.value));
        spacing.sort_by(|a, b| a.value.total_cmp(&b.value));

        DesignTokenSet {
            colors: dedup_by_key(self.colors, |t| t.hex.clone()),
            typography: dedup_by_key(self.typography, |t| {
                (t.font_family.clone(), float_key(t.font_size), t.font_weight)
            }),
            spacing,
            effects: dedup_by_key(self.effects, |t| {
                (float_key(t.blur), float_key(t.x), float_key(t.y))
            }),
            metadata: None,
        }
    }
}

/// Keep the first token for each key, preserving insertion order.
fn dedup_by_key<T, K, F>(tokens: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    tokens.into_iter().filter(|t| seen.insert(key(t))).collect()
}

/// Hashable key for a pixel value; `-0.0` and `0.0` compare equal.
fn float_key(value: f64) -> u64 {
    (value + 0.0).to_bits()
}
