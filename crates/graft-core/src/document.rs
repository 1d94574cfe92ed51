//! The design tool's scene graph, as fetched from its REST API.
//!
//! Every attribute beyond identity is optional because presence varies by
//! node type. The pipeline treats these trees as immutable snapshots.

use serde::{Deserialize, Serialize};

use crate::types::{Color, Rect, Vector};

/// A whole design file payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
    pub document: DocumentNode,
}

impl Document {
    /// Top-level pages (canvases) of the file.
    pub fn pages(&self) -> &[DocumentNode] {
        &self.document.children
    }

    /// Ids of the top-level pages, in file order.
    pub fn page_ids(&self) -> Vec<String> {
        self.pages().iter().map(|p| p.id.clone()).collect()
    }
}

/// One element of the scene graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_bounding_box: Option<Rect>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Paint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<LayoutMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_axis_align_items: Option<PrimaryAxisAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_axis_align_items: Option<CounterAxisAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_sizing_horizontal: Option<LayoutSizing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_sizing_vertical: Option<LayoutSizing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TypeStyle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DocumentNode>,
}

impl DocumentNode {
    /// Create a node with only identity fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type,
            visible: None,
            absolute_bounding_box: None,
            fills: Vec::new(),
            strokes: Vec::new(),
            stroke_weight: None,
            effects: Vec::new(),
            corner_radius: None,
            layout_mode: None,
            primary_axis_align_items: None,
            counter_axis_align_items: None,
            item_spacing: None,
            padding_top: None,
            padding_right: None,
            padding_bottom: None,
            padding_left: None,
            layout_sizing_horizontal: None,
            layout_sizing_vertical: None,
            characters: None,
            style: None,
            children: Vec::new(),
        }
    }

    /// Add a child node.
    pub fn with_child(mut self, child: DocumentNode) -> Self {
        self.children.push(child);
        self
    }

    /// Add a fill paint.
    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fills.push(paint);
        self
    }

    /// Absent visibility means visible.
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }

    /// Whether any auto-layout padding field is defined.
    pub fn has_padding(&self) -> bool {
        self.padding_top.is_some()
            || self.padding_right.is_some()
            || self.padding_bottom.is_some()
            || self.padding_left.is_some()
    }

    /// Find a node by id in this subtree (pre-order).
    pub fn find(&self, id: &str) -> Option<&DocumentNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }
}

/// Find a node by id across a forest.
pub fn find_node<'a>(roots: &'a [DocumentNode], id: &str) -> Option<&'a DocumentNode> {
    roots.iter().find_map(|r| r.find(id))
}

/// Node type vocabulary of the design tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Document,
    Canvas,
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Instance,
    Text,
    Rectangle,
    Ellipse,
    Line,
    Vector,
    BooleanOperation,
    Star,
    RegularPolygon,
    Slice,
    #[serde(other)]
    Unknown,
}

/// A fill or stroke paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub paint_type: PaintType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

impl Paint {
    /// A solid paint of the given color.
    pub fn solid(color: Color) -> Self {
        Self {
            paint_type: PaintType::Solid,
            visible: None,
            opacity: None,
            color: Some(color),
            image_ref: None,
        }
    }

    /// An image paint referencing an uploaded image.
    pub fn image(image_ref: impl Into<String>) -> Self {
        Self {
            paint_type: PaintType::Image,
            visible: None,
            opacity: None,
            color: None,
            image_ref: Some(image_ref.into()),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }

    /// The color of a SOLID paint.
    pub fn solid_color(&self) -> Option<Color> {
        match self.paint_type {
            PaintType::Solid => self.color,
            _ => None,
        }
    }

    /// Effective opacity: color alpha multiplied by paint opacity.
    pub fn effective_opacity(&self) -> f64 {
        let alpha = self.color.map(|c| c.a).unwrap_or(1.0);
        alpha * self.opacity.unwrap_or(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintType {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    Emoji,
    Video,
    #[serde(other)]
    Unknown,
}

/// A visual effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    #[serde(rename = "type")]
    pub effect_type: EffectType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Vector>,
}

impl Effect {
    /// A drop shadow.
    pub fn drop_shadow(offset: Vector, radius: f64, color: Color) -> Self {
        Self {
            effect_type: EffectType::DropShadow,
            visible: None,
            radius: Some(radius),
            spread: None,
            color: Some(color),
            offset: Some(offset),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }

    pub fn is_shadow(&self) -> bool {
        matches!(self.effect_type, EffectType::DropShadow | EffectType::InnerShadow)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectType {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    None,
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAxisAlign {
    Min,
    Center,
    Max,
    SpaceBetween,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAxisAlign {
    Min,
    Center,
    Max,
    Baseline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutSizing {
    Fixed,
    Hug,
    Fill,
}

/// Text style of a TEXT node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height_px: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align_horizontal: Option<TextAlignHorizontal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignHorizontal {
    Left,
    Center,
    Right,
    Justified,
}
