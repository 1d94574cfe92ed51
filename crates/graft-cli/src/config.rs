//! `graft.toml` loading and defaults.

use std::fs;
use std::path::{Path, PathBuf};

use graft_codegen::CodegenOptions;
use graft_convert::ConverterConfig;
use graft_core::GraftError;
use graft_tokens::ExtractOptions;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "graft.toml";

/// Pipeline configuration loaded from TOML; every table is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraftConfig {
    pub extract: ExtractOptions,
    pub convert: ConverterConfig,
    pub codegen: CodegenOptions,
    /// Where `generate` writes files unless `--out` is given.
    pub output_dir: PathBuf,
}

impl Default for GraftConfig {
    fn default() -> Self {
        Self {
            extract: ExtractOptions::default(),
            convert: ConverterConfig::default(),
            codegen: CodegenOptions::default(),
            output_dir: PathBuf::from("generated"),
        }
    }
}

impl GraftConfig {
    /// Load from an explicit path, or from `graft.toml` in the working
    /// directory when present, or fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, GraftError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    debug!("no {} found, using defaults", CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self, GraftError> {
        let data = fs::read_to_string(path)?;
        let config = Self::from_toml(&data)
            .map_err(|e| GraftError::Config(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(GraftConfig::from_toml("").unwrap(), GraftConfig::default());
    }

    #[test]
    fn test_partial_tables() {
        let config = GraftConfig::from_toml(
            r#"
            output_dir = "mobile/src"

            [extract]
            effects = false

            [convert]
            include_hidden = true

            [codegen]
            screens = true
            typescript = false
            "#,
        )
        .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("mobile/src"));
        assert!(!config.extract.effects);
        assert!(config.extract.colors);
        assert!(config.convert.include_hidden);
        assert!(config.convert.detect_buttons);
        assert!(config.codegen.screens);
        assert!(!config.codegen.typescript);
        assert_eq!(config.codegen.screens_dir, "app");
    }

    #[test]
    fn test_from_file_reports_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "output_dir = [").unwrap();
        let err = GraftConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, GraftError::Config(_)));
    }

    #[test]
    fn test_explicit_missing_file_is_io_error() {
        let err = GraftConfig::load(Some(Path::new("/nonexistent/graft.toml"))).unwrap_err();
        assert!(matches!(err, GraftError::Io(_)));
    }
}
