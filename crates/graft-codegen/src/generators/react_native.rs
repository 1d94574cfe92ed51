//! React Native generator styled with NativeWind classes.

use std::collections::HashSet;

use convert_case::{Case, Casing};
use graft_core::{AssetRequest, ConvertedComponent, DesignTokenSet, FileKind, GeneratedFile};
use tracing::debug;

use super::{CodeGenerator, CodegenOptions, GeneratedProject, ProjectOptions};
use crate::error::{CodegenError, Result};
use crate::jsx::{emit_at, primitives_used};
use crate::theme::emit_theme;

pub const THEME_PATH: &str = "tailwind.config.js";
pub const TOKENS_PATH: &str = "design-tokens.json";
pub const ASSET_MANIFEST_PATH: &str = "assets/manifest.json";

/// React Native code generator.
pub struct ReactNativeGenerator {
    options: CodegenOptions,
}

impl ReactNativeGenerator {
    /// Create a generator with default options (TypeScript components).
    pub fn new() -> Self {
        Self::with_options(CodegenOptions::default())
    }

    pub fn with_options(options: CodegenOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodegenOptions {
        &self.options
    }

    fn ext(&self) -> &'static str {
        if self.options.typescript {
            "tsx"
        } else {
            "jsx"
        }
    }

    /// Source for one component or screen file.
    fn component_file(&self, component: &ConvertedComponent, name: &str) -> String {
        let mut lines = Vec::new();

        lines.push("import React from 'react';".to_string());
        let primitives: Vec<&str> = primitives_used(component)
            .into_iter()
            .map(|p| p.tag())
            .collect();
        lines.push(format!(
            "import {{ {} }} from 'react-native';",
            primitives.join(", ")
        ));
        lines.push(String::new());

        let export = if self.options.screens {
            "export default function"
        } else {
            "export function"
        };
        lines.push(format!("{} {}() {{", export, name));
        lines.push("  return (".to_string());
        lines.push(emit_at(component, 4));
        lines.push("  );".to_string());
        lines.push("}".to_string());

        if !self.options.screens {
            lines.push(String::new());
            lines.push(format!("export default {};", name));
        }
        lines.push(String::new());

        lines.join("\n")
    }

    /// Output path for a component. Screen stems are deduplicated in
    /// `stems`, component names already are.
    fn file_path(
        &self,
        component: &ConvertedComponent,
        name: &str,
        stems: &mut HashSet<String>,
    ) -> (String, FileKind) {
        if self.options.screens {
            let stem = unique_name(screen_file_stem(&component.name), stems);
            (
                format!("{}/{}.{}", self.options.screens_dir, stem, self.ext()),
                FileKind::Screen,
            )
        } else {
            (
                format!("{}/{}.{}", self.options.components_dir, name, self.ext()),
                FileKind::Component,
            )
        }
    }

    fn collect_assets(&self, component: &ConvertedComponent, assets: &mut Vec<AssetRequest>) {
        if component.omitted {
            return;
        }
        if let Some(ref image_ref) = component.image_ref {
            if !assets.iter().any(|a| a.node_id == component.id) {
                assets.push(AssetRequest {
                    node_id: component.id.clone(),
                    image_ref: image_ref.clone(),
                    scale: self.options.asset_scale,
                });
            }
        }
        for child in &component.children {
            self.collect_assets(child, assets);
        }
    }
}

impl Default for ReactNativeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for ReactNativeGenerator {
    fn framework_name(&self) -> &'static str {
        "React Native"
    }

    fn generate_component(&self, component: &ConvertedComponent) -> Result<String> {
        Ok(self.component_file(component, &component_name(&component.name)))
    }

    fn generate_design_system(&self, tokens: &DesignTokenSet) -> Result<String> {
        Ok(emit_theme(tokens))
    }

    fn generate_project(&self, project: &ProjectOptions) -> Result<GeneratedProject> {
        if project.components.is_empty() && project.tokens.is_none() {
            return Err(CodegenError::EmptyProject);
        }

        let mut files = Vec::new();

        if let Some(ref tokens) = project.tokens {
            files.push(GeneratedFile::new(
                THEME_PATH,
                self.generate_design_system(tokens)?,
                FileKind::Theme,
            ));
            if self.options.token_json {
                files.push(GeneratedFile::new(TOKENS_PATH, tokens.to_json()?, FileKind::Theme));
            }
        }

        let mut taken = HashSet::new();
        let mut stems = HashSet::new();
        let mut assets = Vec::new();
        for component in &project.components {
            let name = unique_name(component_name(&component.name), &mut taken);
            let (path, kind) = self.file_path(component, &name, &mut stems);
            files.push(GeneratedFile::new(
                path,
                self.component_file(component, &name),
                kind,
            ));
            self.collect_assets(component, &mut assets);
        }

        if !assets.is_empty() {
            files.push(GeneratedFile::new(
                ASSET_MANIFEST_PATH,
                serde_json::to_string_pretty(&assets)?,
                FileKind::Asset,
            ));
        }

        debug!(
            files = files.len(),
            assets = assets.len(),
            framework = self.framework_name(),
            "generated project"
        );

        Ok(GeneratedProject { files, assets })
    }
}

/// PascalCase identifier for a component, e.g. `"Home / Header"` → `HomeHeader`.
pub fn component_name(name: &str) -> String {
    let pascal = words(name).to_case(Case::Pascal);
    if pascal.is_empty() {
        "Component".to_string()
    } else if pascal.starts_with(|c: char| c.is_ascii_digit()) {
        format!("Component{}", pascal)
    } else {
        pascal
    }
}

/// kebab-case file stem for a routed screen, e.g. `"Home Screen"` → `home-screen`.
pub fn screen_file_stem(name: &str) -> String {
    let kebab = words(name).to_case(Case::Kebab);
    if kebab.is_empty() {
        "screen".to_string()
    } else {
        kebab
    }
}

fn words(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn unique_name(base: String, taken: &mut HashSet<String>) -> String {
    let mut candidate = base.clone();
    let mut n = 2;
    while !taken.insert(candidate.clone()) {
        candidate = format!("{}{}", base, n);
        n += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use graft_core::{ComponentType, SpacingToken};

    fn text(id: &str, content: &str) -> ConvertedComponent {
        let mut component = ConvertedComponent::new(id, content, ComponentType::Text);
        component.text = Some(content.to_string());
        component
    }

    fn screen() -> ConvertedComponent {
        ConvertedComponent::new("1:1", "Home Screen", ComponentType::Frame)
            .with_child(text("1:2", "Hello"))
    }

    #[test]
    fn test_generate_component() {
        let gen = ReactNativeGenerator::new();
        let code = gen.generate_component(&screen()).unwrap();
        insta::assert_snapshot!(code.trim_end(), @r###"
        import React from 'react';
        import { Text, View } from 'react-native';

        export function HomeScreen() {
          return (
            <View testID="1:1">
              <Text testID="1:2">Hello</Text>
            </View>
          );
        }

        export default HomeScreen;
        "###);
    }

    #[test]
    fn test_screen_mode() {
        let gen = ReactNativeGenerator::with_options(CodegenOptions {
            screens: true,
            ..Default::default()
        });
        let project = gen
            .generate_project(&ProjectOptions {
                components: vec![screen()],
                tokens: None,
            })
            .unwrap();
        assert_eq!(project.files.len(), 1);
        assert_eq!(project.files[0].path, "app/home-screen.tsx");
        assert_eq!(project.files[0].kind, FileKind::Screen);
        assert!(project.files[0]
            .content
            .contains("export default function HomeScreen() {"));
    }

    #[test]
    fn test_generate_project_files() {
        let gen = ReactNativeGenerator::new();
        let mut tokens = DesignTokenSet::new();
        tokens.spacing.push(SpacingToken {
            name: "spacing-16".into(),
            value: 16.0,
        });
        let mut hero = ConvertedComponent::new("2:1", "Hero", ComponentType::Image);
        hero.image_ref = Some("img-1".into());

        let project = gen
            .generate_project(&ProjectOptions {
                components: vec![screen(), hero],
                tokens: Some(tokens),
            })
            .unwrap();

        let paths: Vec<&str> = project.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                THEME_PATH,
                TOKENS_PATH,
                "components/HomeScreen.tsx",
                "components/Hero.tsx",
                ASSET_MANIFEST_PATH,
            ]
        );
        assert_eq!(project.assets.len(), 1);
        assert_eq!(project.assets[0].scale, 2);

        let manifest: serde_json::Value =
            serde_json::from_str(&project.files[4].content).unwrap();
        assert_eq!(manifest[0]["nodeId"], "2:1");
        assert_eq!(manifest[0]["imageRef"], "img-1");
    }

    #[test]
    fn test_javascript_extension_and_no_token_json() {
        let gen = ReactNativeGenerator::with_options(CodegenOptions {
            typescript: false,
            token_json: false,
            ..Default::default()
        });
        let project = gen
            .generate_project(&ProjectOptions {
                components: vec![screen()],
                tokens: Some(DesignTokenSet::new()),
            })
            .unwrap();
        let paths: Vec<&str> = project.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec![THEME_PATH, "components/HomeScreen.jsx"]);
    }

    #[test]
    fn test_duplicate_names_get_suffixes() {
        let gen = ReactNativeGenerator::new();
        let card = || ConvertedComponent::new("3:1", "Card", ComponentType::Frame);
        let project = gen
            .generate_project(&ProjectOptions {
                components: vec![card(), card(), card()],
                tokens: None,
            })
            .unwrap();
        let paths: Vec<&str> = project.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["components/Card.tsx", "components/Card2.tsx", "components/Card3.tsx"]
        );
    }

    #[test]
    fn test_duplicate_screens_get_distinct_files() {
        let gen = ReactNativeGenerator::with_options(CodegenOptions {
            screens: true,
            ..Default::default()
        });
        let home = || ConvertedComponent::new("5:1", "Home", ComponentType::Frame);
        let project = gen
            .generate_project(&ProjectOptions {
                components: vec![home(), home()],
                tokens: None,
            })
            .unwrap();
        let paths: Vec<&str> = project.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["app/home.tsx", "app/home2.tsx"]);
        assert!(project.files[1]
            .content
            .contains("export default function Home2() {"));
    }

    #[test]
    fn test_hidden_images_are_not_requested() {
        let gen = ReactNativeGenerator::new();
        let root = ConvertedComponent::new("4:1", "Gallery", ComponentType::Frame)
            .with_child(ConvertedComponent::omitted("4:2", "Hidden photo"));
        let project = gen
            .generate_project(&ProjectOptions {
                components: vec![root],
                tokens: None,
            })
            .unwrap();
        assert!(project.assets.is_empty());
        assert_eq!(project.files.len(), 1);
    }

    #[test]
    fn test_empty_project_is_an_error() {
        let gen = ReactNativeGenerator::new();
        let result = gen.generate_project(&ProjectOptions::default());
        assert!(matches!(result, Err(CodegenError::EmptyProject)));
    }

    #[test]
    fn test_component_names() {
        assert_eq!(component_name("Home / Header"), "HomeHeader");
        assert_eq!(component_name("primary button"), "PrimaryButton");
        assert_eq!(component_name("!!!"), "Component");
        assert_eq!(screen_file_stem("Home Screen"), "home-screen");
        assert_eq!(screen_file_stem(""), "screen");
    }

    #[test]
    fn test_project_output_is_deterministic() {
        let gen = ReactNativeGenerator::new();
        let project = ProjectOptions {
            components: vec![screen()],
            tokens: Some(DesignTokenSet::new()),
        };
        let first = gen.generate_project(&project).unwrap();
        let second = gen.generate_project(&project).unwrap();
        assert_eq!(first.files, second.files);
    }
}
