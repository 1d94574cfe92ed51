//! Tailwind theme emission from design tokens.

use graft_core::{format_number, DesignTokenSet, EffectToken};
use indexmap::IndexMap;

use crate::js::js_string;

/// Key used for the ungrouped value of a color.
const DEFAULT_KEY: &str = "DEFAULT";

/// Emit a `tailwind.config.js` whose `theme.extend` carries the token set.
///
/// Color names with exactly one `/` become `group → variant` entries; every
/// other color becomes `{ name: { DEFAULT: hex } }`. Spacing is rekeyed on
/// the 4px grid (`16` → `'4': '1rem'`).
pub fn emit_theme(tokens: &DesignTokenSet) -> String {
    let mut lines = Vec::new();

    lines.push("/** @type {import('tailwindcss').Config} */".to_string());
    lines.push("module.exports = {".to_string());
    lines.push("  content: ['./app/**/*.{js,jsx,ts,tsx}', './components/**/*.{js,jsx,ts,tsx}'],".to_string());
    lines.push("  presets: [require('nativewind/preset')],".to_string());
    lines.push("  theme: {".to_string());
    lines.push("    extend: {".to_string());

    // Colors
    lines.push("      colors: {".to_string());
    for (group, variants) in color_groups(tokens) {
        lines.push(format!("        {}: {{", js_string(&group)));
        for (variant, hex) in variants {
            let key = if variant == DEFAULT_KEY {
                variant
            } else {
                js_string(&variant)
            };
            lines.push(format!("          {}: {},", key, js_string(&hex)));
        }
        lines.push("        },".to_string());
    }
    lines.push("      },".to_string());

    // Font sizes
    lines.push("      fontSize: {".to_string());
    for token in &tokens.typography {
        lines.push(format!(
            "        {}: ['{}px', {{ lineHeight: '{}px' }}],",
            js_string(&token.name),
            format_number(token.font_size),
            format_number(token.line_height)
        ));
    }
    lines.push("      },".to_string());

    // Spacing
    lines.push("      spacing: {".to_string());
    for token in &tokens.spacing {
        lines.push(format!(
            "        '{}': '{}rem',",
            format_number(token.value / 4.0),
            format_number(token.value / 16.0)
        ));
    }
    lines.push("      },".to_string());

    // Shadows
    lines.push("      boxShadow: {".to_string());
    for token in &tokens.effects {
        lines.push(format!(
            "        {}: {},",
            js_string(&token.name),
            js_string(&box_shadow(token))
        ));
    }
    lines.push("      },".to_string());

    lines.push("    },".to_string());
    lines.push("  },".to_string());
    lines.push("  plugins: [],".to_string());
    lines.push("};".to_string());
    lines.push(String::new());

    lines.join("\n")
}

/// Group colors by their single `/` separator; first token wins per key.
fn color_groups(tokens: &DesignTokenSet) -> IndexMap<String, IndexMap<String, String>> {
    let mut groups: IndexMap<String, IndexMap<String, String>> = IndexMap::new();
    for token in &tokens.colors {
        let (group, variant) = match token.name.split_once('/') {
            Some((group, variant)) if !variant.contains('/') => (group, variant),
            _ => (token.name.as_str(), DEFAULT_KEY),
        };
        groups
            .entry(group.to_string())
            .or_default()
            .entry(variant.to_string())
            .or_insert_with(|| token.hex.clone());
    }
    groups
}

/// CSS box-shadow value for an effect token.
fn box_shadow(token: &EffectToken) -> String {
    let (r, g, b) = parse_hex(&token.color).unwrap_or((0, 0, 0));
    format!(
        "{}{}px {}px {}px {}px rgba({}, {}, {}, {})",
        if token.inset { "inset " } else { "" },
        format_number(token.x),
        format_number(token.y),
        format_number(token.blur),
        format_number(token.spread),
        r,
        g,
        b,
        format_number(token.opacity)
    )
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
