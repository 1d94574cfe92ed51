//! Mapping of converted component attributes to NativeWind utility classes.
//!
//! Each attribute group (layout, size, background, border, padding,
//! typography) is looked up independently in a fixed table. A table hit
//! becomes a utility class; a miss keeps the exact value as an inline style
//! entry so nothing is lost. Shadows have no class form in React Native and
//! are always inline.

use graft_core::{
    AlignItems, Border, ConvertedComponent, Dimension, FlexDirection, JustifyContent, Layout,
    Padding, Shadow, Size, TextAlign, Typography,
};
use indexmap::IndexMap;
use serde_json::Value;

use crate::js::{json_to_js, number};

/// Pixel value → Tailwind spacing key. Also used for sizing.
pub const SPACING_SCALE: &[(f64, &str)] = &[
    (0.0, "0"),
    (1.0, "px"),
    (2.0, "0.5"),
    (4.0, "1"),
    (6.0, "1.5"),
    (8.0, "2"),
    (10.0, "2.5"),
    (12.0, "3"),
    (14.0, "3.5"),
    (16.0, "4"),
    (20.0, "5"),
    (24.0, "6"),
    (28.0, "7"),
    (32.0, "8"),
    (36.0, "9"),
    (40.0, "10"),
    (44.0, "11"),
    (48.0, "12"),
    (56.0, "14"),
    (64.0, "16"),
    (80.0, "20"),
    (96.0, "24"),
];

pub const FONT_SIZE_SCALE: &[(f64, &str)] = &[
    (12.0, "xs"),
    (14.0, "sm"),
    (16.0, "base"),
    (18.0, "lg"),
    (20.0, "xl"),
    (24.0, "2xl"),
    (30.0, "3xl"),
    (36.0, "4xl"),
    (48.0, "5xl"),
    (60.0, "6xl"),
];

pub const FONT_WEIGHT_SCALE: &[(u16, &str)] = &[
    (100, "thin"),
    (200, "extralight"),
    (300, "light"),
    (400, "normal"),
    (500, "medium"),
    (600, "semibold"),
    (700, "bold"),
    (800, "extrabold"),
    (900, "black"),
];

/// Corner radius → complete class name.
pub const RADIUS_SCALE: &[(f64, &str)] = &[
    (0.0, "rounded-none"),
    (2.0, "rounded-sm"),
    (4.0, "rounded"),
    (6.0, "rounded-md"),
    (8.0, "rounded-lg"),
    (12.0, "rounded-xl"),
    (16.0, "rounded-2xl"),
    (24.0, "rounded-3xl"),
    (9999.0, "rounded-full"),
];

/// Border width → complete class name.
pub const BORDER_WIDTH_SCALE: &[(f64, &str)] = &[
    (0.0, "border-0"),
    (1.0, "border"),
    (2.0, "border-2"),
    (4.0, "border-4"),
    (8.0, "border-8"),
];

/// Uppercase `#RRGGBB` → Tailwind palette name.
pub const COLOR_PALETTE: &[(&str, &str)] = &[
    ("#FFFFFF", "white"),
    ("#000000", "black"),
    ("#F9FAFB", "gray-50"),
    ("#F3F4F6", "gray-100"),
    ("#E5E7EB", "gray-200"),
    ("#D1D5DB", "gray-300"),
    ("#9CA3AF", "gray-400"),
    ("#6B7280", "gray-500"),
    ("#4B5563", "gray-600"),
    ("#374151", "gray-700"),
    ("#1F2937", "gray-800"),
    ("#111827", "gray-900"),
    ("#EF4444", "red-500"),
    ("#DC2626", "red-600"),
    ("#F97316", "orange-500"),
    ("#EAB308", "yellow-500"),
    ("#22C55E", "green-500"),
    ("#16A34A", "green-600"),
    ("#3B82F6", "blue-500"),
    ("#2563EB", "blue-600"),
    ("#6366F1", "indigo-500"),
    ("#A855F7", "purple-500"),
    ("#EC4899", "pink-500"),
];

const TOLERANCE: f64 = 1e-6;

/// Inline style entries in emission order.
pub type InlineStyle = IndexMap<String, Value>;

/// Classes plus inline leftovers for one component.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleMapping {
    /// Space-separated utility classes.
    pub class_name: String,
    /// Values with no table entry, kept exact.
    pub inline_style: Option<InlineStyle>,
}

impl StyleMapping {
    pub fn is_empty(&self) -> bool {
        self.class_name.is_empty() && self.inline_style.is_none()
    }

    /// The inline style as a JavaScript object literal, e.g. `{ gap: 13 }`.
    pub fn inline_js(&self) -> Option<String> {
        self.inline_style.as_ref().map(|style| {
            let object = style
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<serde_json::Map<_, _>>();
            json_to_js(&Value::Object(object))
        })
    }
}

/// Map every attribute group of a component to classes and inline styles.
pub fn map_styles(component: &ConvertedComponent) -> StyleMapping {
    let mut builder = StyleBuilder::default();

    if let Some(ref layout) = component.layout {
        builder.layout(layout);
    }
    if let Some(ref size) = component.size {
        builder.size(size);
    }
    if let Some(ref hex) = component.background_color {
        builder.color("bg", hex, "backgroundColor");
    }
    if let Some(ref border) = component.border {
        builder.border(border);
    }
    if let Some(ref padding) = component.padding {
        builder.padding(padding);
    }
    if let Some(ref typography) = component.typography {
        builder.typography(typography);
    }
    if let Some(ref shadow) = component.shadow {
        builder.shadow(shadow);
    }

    builder.finish()
}

/// Tailwind spacing key for an exact pixel value.
pub fn spacing_key(px: f64) -> Option<&'static str> {
    lookup(SPACING_SCALE, px)
}

/// Palette name for a hex color; case and a missing `#` are tolerated.
pub fn palette_name(hex: &str) -> Option<&'static str> {
    let hex = hex.trim();
    let normalized = format!("#{}", hex.trim_start_matches('#').to_ascii_uppercase());
    COLOR_PALETTE
        .iter()
        .find(|(candidate, _)| *candidate == normalized)
        .map(|(_, name)| *name)
}

fn lookup(table: &'static [(f64, &'static str)], value: f64) -> Option<&'static str> {
    table
        .iter()
        .find(|(px, _)| (px - value).abs() < TOLERANCE)
        .map(|(_, key)| *key)
}

#[derive(Default)]
struct StyleBuilder {
    classes: Vec<String>,
    inline: InlineStyle,
}

impl StyleBuilder {
    fn class(&mut self, class: impl Into<String>) {
        self.classes.push(class.into());
    }

    fn inline(&mut self, key: &str, value: Value) {
        self.inline.insert(key.to_string(), value);
    }

    /// Spacing-scale lookup: `<prefix>-<key>` on a hit, inline px on a miss.
    fn scaled(&mut self, prefix: &str, px: f64, style_key: &str) {
        match spacing_key(px) {
            Some(key) => self.class(format!("{}-{}", prefix, key)),
            None => self.inline(style_key, number(px)),
        }
    }

    fn color(&mut self, prefix: &str, hex: &str, style_key: &str) {
        match palette_name(hex) {
            Some(name) => self.class(format!("{}-{}", prefix, name)),
            None => self.inline(style_key, Value::String(hex.to_string())),
        }
    }

    fn layout(&mut self, layout: &Layout) {
        self.class(match layout.flex_direction {
            FlexDirection::Row => "flex-row",
            FlexDirection::Column => "flex-col",
        });

        // flex-start and stretch are React Native defaults.
        match layout.justify_content {
            JustifyContent::FlexStart => {}
            JustifyContent::Center => self.class("justify-center"),
            JustifyContent::FlexEnd => self.class("justify-end"),
            JustifyContent::SpaceBetween => self.class("justify-between"),
        }
        match layout.align_items {
            AlignItems::Stretch => {}
            AlignItems::FlexStart => self.class("items-start"),
            AlignItems::Center => self.class("items-center"),
            AlignItems::FlexEnd => self.class("items-end"),
            AlignItems::Baseline => self.class("items-baseline"),
        }

        if let Some(gap) = layout.gap {
            self.scaled("gap", gap, "gap");
        }
    }

    fn size(&mut self, size: &Size) {
        for (prefix, dimension, style_key) in
            [("w", size.width, "width"), ("h", size.height, "height")]
        {
            match dimension {
                Dimension::Full => self.class(format!("{}-full", prefix)),
                Dimension::Px(px) => self.scaled(prefix, px, style_key),
            }
        }
    }

    fn border(&mut self, border: &Border) {
        if let Some(width) = border.width {
            match lookup(BORDER_WIDTH_SCALE, width) {
                Some(class) => self.class(class),
                None => self.inline("borderWidth", number(width)),
            }
        }
        if let Some(radius) = border.radius {
            match lookup(RADIUS_SCALE, radius) {
                Some(class) => self.class(class),
                None => self.inline("borderRadius", number(radius)),
            }
        }
        if let Some(ref hex) = border.color {
            self.color("border", hex, "borderColor");
        }
    }

    fn padding(&mut self, padding: &Padding) {
        let Padding {
            top,
            right,
            bottom,
            left,
        } = *padding;

        if top == right && right == bottom && bottom == left {
            if top != 0.0 {
                self.scaled("p", top, "padding");
            }
        } else if top == bottom && left == right {
            if left != 0.0 {
                self.scaled("px", left, "paddingHorizontal");
            }
            if top != 0.0 {
                self.scaled("py", top, "paddingVertical");
            }
        } else {
            for (prefix, value, style_key) in [
                ("pt", top, "paddingTop"),
                ("pr", right, "paddingRight"),
                ("pb", bottom, "paddingBottom"),
                ("pl", left, "paddingLeft"),
            ] {
                if value != 0.0 {
                    self.scaled(prefix, value, style_key);
                }
            }
        }
    }

    fn typography(&mut self, typography: &Typography) {
        if let Some(size) = typography.font_size {
            match lookup(FONT_SIZE_SCALE, size) {
                Some(key) => self.class(format!("text-{}", key)),
                None => self.inline("fontSize", number(size)),
            }
        }

        if let Some(ref weight) = typography.font_weight {
            let class = weight.parse::<u16>().ok().and_then(|w| {
                FONT_WEIGHT_SCALE
                    .iter()
                    .find(|(candidate, _)| *candidate == w)
                    .map(|(_, name)| *name)
            });
            match class {
                Some(name) => self.class(format!("font-{}", name)),
                None => self.inline("fontWeight", Value::String(weight.clone())),
            }
        }

        match typography.text_align {
            TextAlign::Left => {}
            TextAlign::Center => self.class("text-center"),
            TextAlign::Right => self.class("text-right"),
            TextAlign::Justify => self.class("text-justify"),
        }

        if let Some(ref hex) = typography.color {
            self.color("text", hex, "color");
        }
        if let Some(ref family) = typography.font_family {
            self.inline("fontFamily", Value::String(family.clone()));
        }
        if let Some(line_height) = typography.line_height {
            self.inline("lineHeight", number(line_height));
        }
        if let Some(spacing) = typography.letter_spacing {
            self.inline("letterSpacing", number(spacing));
        }
    }

    fn shadow(&mut self, shadow: &Shadow) {
        self.inline("shadowColor", Value::String(shadow.color.clone()));
        let mut offset = serde_json::Map::new();
        offset.insert("width".to_string(), number(shadow.offset_x));
        offset.insert("height".to_string(), number(shadow.offset_y));
        self.inline("shadowOffset", Value::Object(offset));
        self.inline("shadowOpacity", number(shadow.opacity));
        self.inline("shadowRadius", number(shadow.radius));
        // Android ignores the shadow* props.
        self.inline("elevation", number(shadow.radius.round()));
    }

    fn finish(self) -> StyleMapping {
        StyleMapping {
            class_name: self.classes.join(" "),
            inline_style: (!self.inline.is_empty()).then_some(self.inline),
        }
    }
}
