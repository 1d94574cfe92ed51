//! Document node to converted component conversion.

use graft_core::{
    format_number, AlignItems, Border, ComponentType, ConvertedComponent, CounterAxisAlign,
    Dimension, DocumentNode, EffectType, FlexDirection, JustifyContent, Layout, LayoutMode,
    LayoutSizing, NodeType, Padding, PaintType, PrimaryAxisAlign, Shadow, Size, TextAlign,
    TextAlignHorizontal, Typography,
};
use tracing::{debug, trace};

use crate::classify::Classifier;
use crate::config::ConverterConfig;

/// Shadow opacity used when the effect carries no color.
pub const DEFAULT_SHADOW_OPACITY: f64 = 0.25;
/// Shadow radius used when the effect carries no radius.
pub const DEFAULT_SHADOW_RADIUS: f64 = 4.0;

/// Stroke width emitted whenever a node has any stroke.
const STROKE_WIDTH: f64 = 1.0;

/// Convert a node and its subtree with the default classifier.
///
/// A TEXT node's solid fill becomes `typography.color`; its
/// `background_color` is always `None`.
pub fn convert(node: &DocumentNode, config: &ConverterConfig) -> ConvertedComponent {
    Converter::new(config).convert(node)
}

/// Converts document subtrees using a configurable classifier.
pub struct Converter<'a> {
    config: &'a ConverterConfig,
    classifier: Classifier,
}

impl<'a> Converter<'a> {
    pub fn new(config: &'a ConverterConfig) -> Self {
        Self::with_classifier(config, Classifier::default())
    }

    pub fn with_classifier(config: &'a ConverterConfig, classifier: Classifier) -> Self {
        Self { config, classifier }
    }

    /// Convert one root node (typically a selected frame).
    pub fn convert(&self, node: &DocumentNode) -> ConvertedComponent {
        let component = self.convert_node(node);
        debug!(root = %node.id, components = component.count(), "converted subtree");
        component
    }

    fn convert_node(&self, node: &DocumentNode) -> ConvertedComponent {
        if !node.is_visible() && !self.config.include_hidden {
            trace!(id = %node.id, "hidden node replaced by placeholder");
            return ConvertedComponent::omitted(node.id.clone(), node.name.clone());
        }

        let component_type = self.classifier.classify(node, self.config);
        trace!(id = %node.id, ?component_type, "classified node");

        let mut component =
            ConvertedComponent::new(node.id.clone(), node.name.clone(), component_type);
        component.layout = extract_layout(node);
        component.size = extract_size(node);
        component.border = extract_border(node);
        component.padding = extract_padding(node);
        component.shadow = extract_shadow(node);

        if node.node_type == NodeType::Text {
            component.typography = extract_typography(node);
            component.text = node.characters.clone();
        } else {
            component.background_color = first_solid_fill(node);
        }

        if component_type == ComponentType::Image {
            component.image_ref = node
                .fills
                .iter()
                .filter(|f| f.paint_type == PaintType::Image)
                .find_map(|f| f.image_ref.clone());
        }

        // TODO: honor flatten_groups and detect_lists once wrapper-collapsing
        // and list semantics are defined; both are accepted and ignored today.
        component.children = node
            .children
            .iter()
            .map(|child| self.convert_node(child))
            .collect();

        component
    }
}

fn first_solid_fill(node: &DocumentNode) -> Option<String> {
    node.fills
        .iter()
        .filter(|f| f.is_visible())
        .find_map(|f| f.solid_color())
        .map(|c| c.to_hex())
}

fn extract_layout(node: &DocumentNode) -> Option<Layout> {
    let flex_direction = match node.layout_mode? {
        LayoutMode::Horizontal => FlexDirection::Row,
        LayoutMode::Vertical => FlexDirection::Column,
        LayoutMode::None => return None,
    };

    let justify_content = match node.primary_axis_align_items {
        Some(PrimaryAxisAlign::Min) | None => JustifyContent::FlexStart,
        Some(PrimaryAxisAlign::Center) => JustifyContent::Center,
        Some(PrimaryAxisAlign::Max) => JustifyContent::FlexEnd,
        Some(PrimaryAxisAlign::SpaceBetween) => JustifyContent::SpaceBetween,
    };

    let align_items = match node.counter_axis_align_items {
        Some(CounterAxisAlign::Min) => AlignItems::FlexStart,
        Some(CounterAxisAlign::Center) => AlignItems::Center,
        Some(CounterAxisAlign::Max) => AlignItems::FlexEnd,
        Some(CounterAxisAlign::Baseline) => AlignItems::Baseline,
        None => AlignItems::Stretch,
    };

    Some(Layout {
        flex_direction,
        justify_content,
        align_items,
        gap: node.item_spacing.filter(|gap| *gap != 0.0),
    })
}

fn extract_size(node: &DocumentNode) -> Option<Size> {
    let bounds = node.absolute_bounding_box?;
    let axis = |sizing: Option<LayoutSizing>, px: f64| match sizing {
        Some(LayoutSizing::Fill) => Dimension::Full,
        _ => Dimension::Px(px),
    };
    Some(Size {
        width: axis(node.layout_sizing_horizontal, bounds.width),
        height: axis(node.layout_sizing_vertical, bounds.height),
    })
}

fn extract_border(node: &DocumentNode) -> Option<Border> {
    let radius = node.corner_radius.filter(|r| *r > 0.0);
    let stroke = node.strokes.first();
    if radius.is_none() && stroke.is_none() {
        return None;
    }
    Some(Border {
        width: stroke.map(|_| STROKE_WIDTH),
        radius,
        color: stroke.and_then(|s| s.solid_color()).map(|c| c.to_hex()),
    })
}

fn extract_padding(node: &DocumentNode) -> Option<Padding> {
    if !node.has_padding() {
        return None;
    }
    Some(Padding {
        top: node.padding_top.unwrap_or(0.0),
        right: node.padding_right.unwrap_or(0.0),
        bottom: node.padding_bottom.unwrap_or(0.0),
        left: node.padding_left.unwrap_or(0.0),
    })
}

fn extract_typography(node: &DocumentNode) -> Option<Typography> {
    let style = node.style.as_ref()?;
    let text_align = match style.text_align_horizontal {
        Some(TextAlignHorizontal::Left) | None => TextAlign::Left,
        Some(TextAlignHorizontal::Center) => TextAlign::Center,
        Some(TextAlignHorizontal::Right) => TextAlign::Right,
        Some(TextAlignHorizontal::Justified) => TextAlign::Justify,
    };
    Some(Typography {
        font_size: style.font_size,
        font_weight: style.font_weight.map(format_number),
        font_family: style.font_family.clone(),
        line_height: style.line_height_px,
        letter_spacing: style.letter_spacing.filter(|s| *s != 0.0),
        text_align,
        color: first_solid_fill(node),
    })
}

fn extract_shadow(node: &DocumentNode) -> Option<Shadow> {
    let effect = node
        .effects
        .iter()
        .find(|e| e.effect_type == EffectType::DropShadow && e.is_visible())?;
    let offset = effect.offset.unwrap_or_default();
    Some(Shadow {
        color: effect.color.unwrap_or_default().to_hex(),
        offset_x: offset.x,
        offset_y: offset.y,
        opacity: effect.color.map(|c| c.a).unwrap_or(DEFAULT_SHADOW_OPACITY),
        radius: effect.radius.unwrap_or(DEFAULT_SHADOW_RADIUS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use graft_core::{Color, Effect, Paint, Rect, TypeStyle, Vector};

    fn text(id: &str, characters: &str) -> DocumentNode {
        let mut node = DocumentNode::new(id, characters, NodeType::Text);
        node.characters = Some(characters.to_string());
        node.style = Some(TypeStyle {
            font_family: Some("Inter".into()),
            font_size: Some(16.0),
            font_weight: Some(400.0),
            ..Default::default()
        });
        node
    }

    fn row(id: &str, gap: f64) -> DocumentNode {
        let mut node = DocumentNode::new(id, "Row", NodeType::Frame);
        node.layout_mode = Some(LayoutMode::Horizontal);
        node.item_spacing = Some(gap);
        node
    }

    #[test]
    fn test_frame_with_text_child() {
        let node = row("1:1", 16.0).with_child(text("1:2", "Hello"));
        let component = convert(&node, &ConverterConfig::default());

        assert_eq!(component.component_type, ComponentType::Frame);
        let layout = component.layout.as_ref().unwrap();
        assert_eq!(layout.flex_direction, FlexDirection::Row);
        assert_eq!(layout.gap, Some(16.0));
        assert_eq!(layout.justify_content, JustifyContent::FlexStart);
        assert_eq!(layout.align_items, AlignItems::Stretch);

        let child = &component.children[0];
        assert_eq!(child.component_type, ComponentType::Text);
        assert_eq!(child.text.as_deref(), Some("Hello"));
        let typography = child.typography.as_ref().unwrap();
        assert_eq!(typography.font_size, Some(16.0));
        assert_eq!(typography.font_weight.as_deref(), Some("400"));
        assert_eq!(typography.text_align, TextAlign::Left);
    }

    #[test]
    fn test_hidden_node_becomes_placeholder() {
        let mut hidden = row("2:1", 8.0).with_child(text("2:2", "Secret"));
        hidden.visible = Some(false);

        let component = convert(&hidden, &ConverterConfig::default());
        assert_eq!(component.id, "2:1");
        assert_eq!(component.name, "Row");
        assert_eq!(component.component_type, ComponentType::Frame);
        assert!(component.omitted);
        assert!(component.children.is_empty());
        assert!(component.layout.is_none());
    }

    #[test]
    fn test_hidden_child_keeps_sibling_positions() {
        let mut hidden = text("3:2", "Hidden");
        hidden.visible = Some(false);
        let node = row("3:1", 0.0)
            .with_child(text("3:0", "First"))
            .with_child(hidden)
            .with_child(text("3:3", "Last"));

        let component = convert(&node, &ConverterConfig::default());
        let ids: Vec<&str> = component.children.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["3:0", "3:2", "3:3"]);
        assert!(component.children[1].omitted);
        assert_eq!(component.children[2].component_type, ComponentType::Text);
    }

    #[test]
    fn test_include_hidden_converts_everything() {
        let mut hidden = row("4:1", 8.0).with_child(text("4:2", "Shown"));
        hidden.visible = Some(false);
        let config = ConverterConfig {
            include_hidden: true,
            ..Default::default()
        };

        let component = convert(&hidden, &config);
        assert!(!component.omitted);
        assert_eq!(component.children.len(), 1);
    }

    #[test]
    fn test_alignment_tables() {
        let mut node = row("5:1", 4.0);
        node.layout_mode = Some(LayoutMode::Vertical);
        node.primary_axis_align_items = Some(PrimaryAxisAlign::SpaceBetween);
        node.counter_axis_align_items = Some(CounterAxisAlign::Baseline);

        let layout = convert(&node, &ConverterConfig::default()).layout.unwrap();
        assert_eq!(layout.flex_direction, FlexDirection::Column);
        assert_eq!(layout.justify_content, JustifyContent::SpaceBetween);
        assert_eq!(layout.align_items, AlignItems::Baseline);
    }

    #[test]
    fn test_no_layout_without_auto_layout() {
        let mut node = DocumentNode::new("5:2", "Free", NodeType::Frame);
        node.layout_mode = Some(LayoutMode::None);
        assert!(convert(&node, &ConverterConfig::default()).layout.is_none());
    }

    #[test]
    fn test_size_background_border_padding() {
        let mut node = DocumentNode::new("6:1", "Card", NodeType::Frame)
            .with_fill(Paint {
                visible: Some(false),
                ..Paint::solid(Color::BLACK)
            })
            .with_fill(Paint::solid(Color::WHITE));
        node.absolute_bounding_box = Some(Rect {
            x: 10.0,
            y: 20.0,
            width: 320.0,
            height: 200.0,
        });
        node.layout_sizing_horizontal = Some(LayoutSizing::Fill);
        node.corner_radius = Some(12.0);
        node.strokes.push(Paint::solid(Color::rgb(0.9, 0.9, 0.9)));
        node.padding_top = Some(16.0);
        node.padding_left = Some(24.0);

        let component = convert(&node, &ConverterConfig::default());
        let size = component.size.unwrap();
        assert_eq!(size.width, Dimension::Full);
        assert_eq!(size.height, Dimension::Px(200.0));
        assert_eq!(component.background_color.as_deref(), Some("#FFFFFF"));

        let border = component.border.unwrap();
        assert_eq!(border.width, Some(1.0));
        assert_eq!(border.radius, Some(12.0));
        assert_eq!(border.color.as_deref(), Some("#E6E6E6"));

        let padding = component.padding.unwrap();
        assert_eq!((padding.top, padding.right, padding.bottom, padding.left), (16.0, 0.0, 0.0, 24.0));
    }

    #[test]
    fn test_text_fill_is_text_color() {
        let mut node = text("7:1", "Warning").with_fill(Paint::solid(Color::rgb(1.0, 0.0, 0.0)));
        if let Some(style) = node.style.as_mut() {
            style.text_align_horizontal = Some(TextAlignHorizontal::Justified);
        }

        let component = convert(&node, &ConverterConfig::default());
        assert!(component.background_color.is_none());
        let typography = component.typography.unwrap();
        assert_eq!(typography.color.as_deref(), Some("#FF0000"));
        assert_eq!(typography.text_align, TextAlign::Justify);
    }

    #[test]
    fn test_shadow_defaults() {
        let mut node = DocumentNode::new("8:1", "Card", NodeType::Frame);
        node.effects.push(Effect {
            effect_type: EffectType::DropShadow,
            visible: None,
            radius: None,
            spread: None,
            color: None,
            offset: Some(Vector { x: 0.0, y: 2.0 }),
        });

        let shadow = convert(&node, &ConverterConfig::default()).shadow.unwrap();
        assert_eq!(shadow.opacity, DEFAULT_SHADOW_OPACITY);
        assert_eq!(shadow.radius, DEFAULT_SHADOW_RADIUS);
        assert_eq!(shadow.offset_y, 2.0);
        assert_eq!(shadow.color, "#000000");
    }

    #[test]
    fn test_shadow_uses_effect_values() {
        let mut node = DocumentNode::new("8:2", "Card", NodeType::Frame);
        node.effects.push(Effect::drop_shadow(
            Vector { x: 1.0, y: 3.0 },
            10.0,
            Color::rgba(0.0, 0.0, 0.0, 0.1),
        ));
        let shadow = convert(&node, &ConverterConfig::default()).shadow.unwrap();
        assert_eq!((shadow.offset_x, shadow.radius, shadow.opacity), (1.0, 10.0, 0.1));
    }

    #[test]
    fn test_image_component_carries_reference() {
        let node = DocumentNode::new("9:1", "Hero", NodeType::Rectangle)
            .with_fill(Paint::image("img-ref-42"));
        let component = convert(&node, &ConverterConfig::default());
        assert_eq!(component.component_type, ComponentType::Image);
        assert_eq!(component.image_ref.as_deref(), Some("img-ref-42"));
    }

    #[test]
    fn test_missing_fields_yield_bare_component() {
        let node = DocumentNode::new("10:1", "Bare", NodeType::Group);
        let component = convert(&node, &ConverterConfig::default());
        assert_eq!(component, ConvertedComponent::new("10:1", "Bare", ComponentType::Frame));
    }

    #[test]
    fn test_converted_tree_serializes() {
        let node = row("11:1", 16.0).with_child(text("11:2", "Hello"));
        let json = serde_json::to_value(convert(&node, &ConverterConfig::default())).unwrap();
        assert_eq!(json["layout"]["flexDirection"], "row");
        assert_eq!(json["children"][0]["typography"]["fontWeight"], "400");
    }
}
