//! JSX serialization of converted component trees.

use std::collections::BTreeSet;

use graft_core::{ComponentType, ConvertedComponent};

use crate::js::js_string;
use crate::style::map_styles;

const INDENT: usize = 2;

/// React Native primitives an emitted tree can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Primitive {
    Image,
    ImageBackground,
    Pressable,
    Text,
    View,
}

impl Primitive {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::ImageBackground => "ImageBackground",
            Self::Pressable => "Pressable",
            Self::Text => "Text",
            Self::View => "View",
        }
    }

    /// The primitive a component is emitted as.
    pub fn for_component(component: &ConvertedComponent) -> Self {
        if component.omitted {
            return Self::View;
        }
        match component.component_type {
            ComponentType::Frame => Self::View,
            ComponentType::Button => Self::Pressable,
            ComponentType::Text => Self::Text,
            ComponentType::Image if component.children.is_empty() => Self::Image,
            ComponentType::Image => Self::ImageBackground,
        }
    }
}

/// Serialize a component tree to JSX at indentation zero.
pub fn emit_component(component: &ConvertedComponent) -> String {
    emit_at(component, 0)
}

/// Serialize a component tree with every line indented by `indent` spaces.
pub fn emit_at(component: &ConvertedComponent, indent: usize) -> String {
    let mut lines = Vec::new();
    emit_element(component, indent, &mut lines);
    lines.join("\n")
}

/// Every primitive used anywhere in the tree, in import order.
pub fn primitives_used(component: &ConvertedComponent) -> BTreeSet<Primitive> {
    let mut used = BTreeSet::new();
    collect_primitives(component, &mut used);
    used
}

fn collect_primitives(component: &ConvertedComponent, used: &mut BTreeSet<Primitive>) {
    used.insert(Primitive::for_component(component));
    for child in &component.children {
        collect_primitives(child, used);
    }
}

fn emit_element(component: &ConvertedComponent, indent: usize, lines: &mut Vec<String>) {
    let spaces = " ".repeat(indent);
    let primitive = Primitive::for_component(component);
    let tag = primitive.tag();

    if component.omitted {
        lines.push(format!(
            "{}<{} testID={} className=\"hidden\" />",
            spaces,
            tag,
            attribute(&component.id)
        ));
        return;
    }

    let attributes = attributes(component, primitive);

    if primitive == Primitive::Text {
        debug_assert!(
            component.children.is_empty(),
            "text component {} has children",
            component.id
        );
        match component.text.as_deref() {
            Some(text) if !text.is_empty() => lines.push(format!(
                "{}<{}{}>{}</{}>",
                spaces,
                tag,
                attributes,
                text_content(text),
                tag
            )),
            _ => lines.push(format!("{}<{}{} />", spaces, tag, attributes)),
        }
        return;
    }

    if component.children.is_empty() {
        lines.push(format!("{}<{}{} />", spaces, tag, attributes));
        return;
    }

    lines.push(format!("{}<{}{}>", spaces, tag, attributes));
    for child in &component.children {
        emit_element(child, indent + INDENT, lines);
    }
    lines.push(format!("{}</{}>", spaces, tag));
}

/// Attribute list with a leading space: testID, source, className, style.
fn attributes(component: &ConvertedComponent, primitive: Primitive) -> String {
    let mut out = format!(" testID={}", attribute(&component.id));

    if matches!(primitive, Primitive::Image | Primitive::ImageBackground) {
        if let Some(ref image_ref) = component.image_ref {
            out.push_str(&format!(" source={{{{ uri: {} }}}}", js_string(image_ref)));
        }
    }

    let mapping = map_styles(component);
    if !mapping.class_name.is_empty() {
        out.push_str(&format!(" className={}", attribute(&mapping.class_name)));
    }
    if let Some(style) = mapping.inline_js() {
        out.push_str(&format!(" style={{{}}}", style));
    }
    out
}

/// A JSX attribute value: a plain string literal when safe, else an expression.
fn attribute(value: &str) -> String {
    if value.contains(['"', '\\', '\n', '&']) {
        format!("{{{}}}", json_string(value))
    } else {
        format!("\"{}\"", value)
    }
}

/// Literal text content, wrapped in a string expression when JSX would
/// otherwise interpret it.
fn text_content(text: &str) -> String {
    let needs_expression = text
        .chars()
        .any(|c| matches!(c, '{' | '}' | '<' | '>' | '&' | '\n' | '\r'))
        || text.starts_with(char::is_whitespace)
        || text.ends_with(char::is_whitespace);
    if needs_expression {
        format!("{{{}}}", json_string(text))
    } else {
        text.to_string()
    }
}

fn json_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use graft_core::{
        AlignItems, Dimension, FlexDirection, JustifyContent, Layout, Size, TextAlign, Typography,
    };

    fn text(id: &str, content: &str) -> ConvertedComponent {
        let mut component = ConvertedComponent::new(id, content, ComponentType::Text);
        component.text = Some(content.to_string());
        component
    }

    fn row(id: &str, gap: f64) -> ConvertedComponent {
        let mut component = ConvertedComponent::new(id, "Row", ComponentType::Frame);
        component.layout = Some(Layout {
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::FlexStart,
            align_items: AlignItems::Stretch,
            gap: Some(gap),
        });
        component
    }

    #[test]
    fn test_view_wrapping_text() {
        let mut hello = text("1:2", "Hello");
        hello.typography = Some(Typography {
            font_size: Some(16.0),
            font_weight: Some("400".into()),
            font_family: None,
            line_height: None,
            letter_spacing: None,
            text_align: TextAlign::Left,
            color: None,
        });
        let tree = row("1:1", 16.0).with_child(hello);

        insta::assert_snapshot!(emit_component(&tree), @r###"
        <View testID="1:1" className="flex-row gap-4">
          <Text testID="1:2" className="text-base font-normal">Hello</Text>
        </View>
        "###);
    }

    #[test]
    fn test_nested_indentation() {
        let tree = row("1:1", 8.0).with_child(
            ConvertedComponent::new("1:2", "CTA", ComponentType::Button).with_child(text("1:3", "Go")),
        );
        let emitted = emit_at(&tree, 4);
        let lines: Vec<&str> = emitted.lines().collect();
        assert_eq!(lines[0], "    <View testID=\"1:1\" className=\"flex-row gap-2\">");
        assert_eq!(lines[1], "      <Pressable testID=\"1:2\">");
        assert_eq!(lines[2], "        <Text testID=\"1:3\">Go</Text>");
        assert_eq!(lines[3], "      </Pressable>");
        assert_eq!(lines[4], "    </View>");
    }

    #[test]
    fn test_image_is_self_closing() {
        let mut image = ConvertedComponent::new("2:1", "Avatar", ComponentType::Image);
        image.image_ref = Some("abc123".into());
        image.size = Some(Size {
            width: Dimension::Px(48.0),
            height: Dimension::Px(48.0),
        });
        assert_eq!(
            emit_component(&image),
            "<Image testID=\"2:1\" source={{ uri: 'abc123' }} className=\"w-12 h-12\" />"
        );
    }

    #[test]
    fn test_image_with_children_becomes_background() {
        let mut hero = ConvertedComponent::new("2:2", "Hero", ComponentType::Image);
        hero.image_ref = Some("bg".into());
        let hero = hero.with_child(text("2:3", "Welcome"));
        let emitted = emit_component(&hero);
        assert!(emitted.starts_with("<ImageBackground testID=\"2:2\" source={{ uri: 'bg' }}>"));
        assert!(emitted.ends_with("</ImageBackground>"));
    }

    #[test]
    fn test_empty_frame_is_self_closing() {
        let frame = ConvertedComponent::new("3:1", "Spacer", ComponentType::Frame);
        assert_eq!(emit_component(&frame), "<View testID=\"3:1\" />");
    }

    #[test]
    fn test_omitted_placeholder_is_hidden_view() {
        let tree = row("4:1", 16.0)
            .with_child(text("4:2", "Shown"))
            .with_child(ConvertedComponent::omitted("4:3", "Secret"));
        let emitted = emit_component(&tree);
        assert!(emitted.contains("  <View testID=\"4:3\" className=\"hidden\" />"));
    }

    #[test]
    fn test_text_escaping() {
        assert_eq!(
            emit_component(&text("5:1", "a < b {c}")),
            "<Text testID=\"5:1\">{\"a < b {c}\"}</Text>"
        );
        assert_eq!(
            emit_component(&text("5:2", "line one\nline two")),
            "<Text testID=\"5:2\">{\"line one\\nline two\"}</Text>"
        );
        assert_eq!(
            emit_component(&text("5:3", "Tom's \"quote\"")),
            "<Text testID=\"5:3\">Tom's \"quote\"</Text>"
        );
    }

    #[test]
    fn test_entities_are_not_decoded() {
        assert_eq!(
            emit_component(&text("5:5", "Fish &amp; Chips")),
            "<Text testID=\"5:5\">{\"Fish &amp; Chips\"}</Text>"
        );
        assert_eq!(attribute("a&lt;b"), "{\"a&lt;b\"}");
        assert_eq!(attribute("1:2"), "\"1:2\"");
    }

    #[test]
    fn test_empty_text_is_self_closing() {
        let component = ConvertedComponent::new("5:4", "Empty", ComponentType::Text);
        assert_eq!(emit_component(&component), "<Text testID=\"5:4\" />");
    }

    #[test]
    fn test_inline_style_attribute() {
        let component = row("6:1", 13.0);
        assert_eq!(
            emit_component(&component),
            "<View testID=\"6:1\" className=\"flex-row\" style={{ gap: 13 }} />"
        );
    }

    #[test]
    fn test_primitives_used() {
        let tree = row("7:1", 8.0)
            .with_child(text("7:2", "A"))
            .with_child(ConvertedComponent::new("7:3", "Pic", ComponentType::Image));
        let used: Vec<&str> = primitives_used(&tree).iter().map(|p| p.tag()).collect();
        assert_eq!(used, vec!["Image", "Text", "View"]);
    }

    #[test]
    fn test_deterministic() {
        let tree = row("8:1", 16.0)
            .with_child(text("8:2", "One"))
            .with_child(text("8:3", "Two"));
        assert_eq!(emit_component(&tree), emit_component(&tree.clone()));
    }
}
