//! Configuration loading for `shaper.toml`.
//!
//! The file is optional. Without `--config`, `shaper.toml` is searched
//! upward from the working directory and defaults apply when none is found.
//! An explicit `--config` that does not exist is an error.
//!
//! # Sections
//!
//! | Section    | Purpose                                   |
//! |------------|-------------------------------------------|
//! | `[encode]` | Global attributes and paint normalization |
//! | `[output]` | Output file naming                        |

mod error;
mod section;
mod util;

pub use error::ConfigError;
pub use section::{EncodeConfig, OutputConfig};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::log;

/// Default config file name, searched upward from the working directory.
pub const CONFIG_FILE: &str = "shaper.toml";

/// Root configuration structure representing shaper.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaperConfig {
    pub encode: EncodeConfig,
    pub output: OutputConfig,

    /// File the configuration was read from, if any.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl ShaperConfig {
    /// Load configuration for this run.
    ///
    /// `explicit` is the `--config` value.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let path = match explicit {
            Some(path) => {
                let path = if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    cwd.join(path)
                };
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path).into());
                }
                Some(path)
            }
            None => util::find_config_file(&cwd, Path::new(CONFIG_FILE)),
        };

        let Some(path) = path else {
            crate::debug!("config"; "no {} found, using defaults", CONFIG_FILE);
            return Ok(Self::default());
        };

        crate::debug!("config"; "loading {}", path.display());
        let mut config = Self::from_path(&path)?;
        config.config_path = Some(path);
        Ok(config)
    }

    /// Parse configuration from TOML string.
    #[cfg(test)]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }

    /// Validate all sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.encode.validate()?;
        self.output.validate()
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_is_default() {
        let config = ShaperConfig::from_str("").unwrap();
        assert_eq!(config, ShaperConfig::default());
    }

    #[test]
    fn test_full_config() {
        let config = ShaperConfig::from_str(
            r#"
[encode]
globals = ["shaper:toolDia=0.25in", "shaper:cutDepth=3mm"]
normalize_paint = false
stroke_width = "0.2"

[output]
suffix = "_shaper"
"#,
        )
        .unwrap();
        assert_eq!(config.encode.globals.len(), 2);
        assert!(!config.encode.normalize_paint);
        assert_eq!(config.encode.stroke_width, "0.2");
        assert_eq!(config.output.suffix, "_shaper");
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = ShaperConfig::from_str("[encode]\nnormalize_paint = false\n").unwrap();
        assert_eq!(config.encode.stroke_width, "0.1");
        assert_eq!(config.output.suffix, "-converted");
    }

    #[test]
    fn test_unknown_fields_collected() {
        let (config, ignored) =
            ShaperConfig::parse_with_ignored("[encode]\nstroke = 1\n[extra]\nx = 1\n").unwrap();
        assert_eq!(config.encode, EncodeConfig::default());
        assert_eq!(ignored, vec!["encode.stroke", "extra"]);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(ShaperConfig::from_str("[encode\n").is_err());
        assert!(ShaperConfig::from_str("[encode]\nnormalize_paint = \"yes\"\n").is_err());
    }

    #[test]
    fn test_validation_applied() {
        assert!(ShaperConfig::from_str("[output]\nsuffix = \"\"\n").is_err());
    }

    #[test]
    fn test_explicit_missing_config() {
        let dir = TempDir::new().unwrap();
        let err = ShaperConfig::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_explicit_config_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[output]\nsuffix = \"-cut\"\n").unwrap();

        let config = ShaperConfig::load(Some(&path)).unwrap();
        assert_eq!(config.output.suffix, "-cut");
        assert_eq!(config.config_path, Some(path));
    }
}
