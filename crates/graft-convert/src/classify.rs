//! Component type inference.
//!
//! Classification is an ordered list of rules; the first rule that matches
//! decides the component type. Rules inspect one node in isolation and never
//! look at the traversal.

use graft_core::{ComponentType, DocumentNode, NodeType, PaintType};

use crate::config::ConverterConfig;

/// Name fragments that mark a node as a button.
pub const BUTTON_KEYWORDS: &[&str] = &["button", "btn", "cta"];

/// A single classification rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// TEXT nodes are text.
    TextNode,
    /// Nodes whose lowercased name contains any keyword are buttons.
    /// Skipped when button detection is disabled.
    NameKeywords {
        keywords: Vec<&'static str>,
        component: ComponentType,
    },
    /// Nodes with an image fill are images.
    ImageFill,
}

impl Rule {
    /// Apply this rule, returning a type when it matches.
    pub fn apply(&self, node: &DocumentNode, config: &ConverterConfig) -> Option<ComponentType> {
        match self {
            Rule::TextNode => (node.node_type == NodeType::Text).then_some(ComponentType::Text),
            Rule::NameKeywords { keywords, component } => {
                if *component == ComponentType::Button && !config.detect_buttons {
                    return None;
                }
                let name = node.name.to_lowercase();
                keywords
                    .iter()
                    .any(|k| name.contains(k))
                    .then_some(*component)
            }
            Rule::ImageFill => node
                .fills
                .iter()
                .any(|f| f.paint_type == PaintType::Image)
                .then_some(ComponentType::Image),
        }
    }
}

/// Ordered rule list with a fallback type.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<Rule>,
    fallback: ComponentType,
}

impl Classifier {
    /// Create a classifier from explicit rules.
    pub fn new(rules: Vec<Rule>, fallback: ComponentType) -> Self {
        Self { rules, fallback }
    }

    /// Classify a node: first matching rule wins, else the fallback.
    pub fn classify(&self, node: &DocumentNode, config: &ConverterConfig) -> ComponentType {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(node, config))
            .unwrap_or(self.fallback)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl Default for Classifier {
    /// Text, then button names, then image fills, else Frame.
    fn default() -> Self {
        Self::new(
            vec![
                Rule::TextNode,
                Rule::NameKeywords {
                    keywords: BUTTON_KEYWORDS.to_vec(),
                    component: ComponentType::Button,
                },
                Rule::ImageFill,
            ],
            ComponentType::Frame,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graft_core::Paint;

    fn classify(node: &DocumentNode) -> ComponentType {
        Classifier::default().classify(node, &ConverterConfig::default())
    }

    #[test]
    fn test_text_outranks_button_name() {
        let node = DocumentNode::new("1:1", "submit-button", NodeType::Text);
        assert_eq!(classify(&node), ComponentType::Text);
    }

    #[test]
    fn test_button_keywords() {
        for name in ["Primary Button", "btn/secondary", "Hero CTA"] {
            let node = DocumentNode::new("1:1", name, NodeType::Frame);
            assert_eq!(classify(&node), ComponentType::Button, "{}", name);
        }
    }

    #[test]
    fn test_button_outranks_image_fill() {
        let node = DocumentNode::new("1:1", "Image Button", NodeType::Rectangle)
            .with_fill(Paint::image("ref"));
        assert_eq!(classify(&node), ComponentType::Button);
    }

    #[test]
    fn test_image_fill() {
        let node = DocumentNode::new("1:1", "Avatar", NodeType::Ellipse)
            .with_fill(Paint::image("ref"));
        assert_eq!(classify(&node), ComponentType::Image);
    }

    #[test]
    fn test_fallback_is_frame() {
        let node = DocumentNode::new("1:1", "Card", NodeType::Frame);
        assert_eq!(classify(&node), ComponentType::Frame);
    }

    #[test]
    fn test_button_detection_can_be_disabled() {
        let node = DocumentNode::new("1:1", "Primary Button", NodeType::Frame);
        let config = ConverterConfig {
            detect_buttons: false,
            ..Default::default()
        };
        assert_eq!(
            Classifier::default().classify(&node, &config),
            ComponentType::Frame
        );
    }

    #[test]
    fn test_custom_rule_order() {
        let classifier = Classifier::new(vec![Rule::ImageFill, Rule::TextNode], ComponentType::Frame);
        let node = DocumentNode::new("1:1", "Logo button", NodeType::Rectangle)
            .with_fill(Paint::image("ref"));
        assert_eq!(
            classifier.classify(&node, &ConverterConfig::default()),
            ComponentType::Image
        );
        assert_eq!(classifier.rules().len(), 2);
    }
}
