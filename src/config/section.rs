//! `[encode]` and `[output]` sections.
//!
//! # Example
//!
//! ```toml
//! [encode]
//! globals = ["shaper:toolDia=0.25in"]   # Applied to every leaf, lowest priority
//! normalize_paint = true                # Rewrite fill/stroke-width after classification
//! stroke_width = "0.1"                  # stroke-width written by normalization
//!
//! [output]
//! suffix = "-converted"                 # Appended to the input stem
//! ```

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Encoder settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeConfig {
    /// `shaper:name=value` tokens applied below every group and leaf.
    pub globals: Vec<String>,

    pub normalize_paint: bool,

    pub stroke_width: String,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            globals: Vec::new(),
            normalize_paint: true,
            stroke_width: "0.1".to_string(),
        }
    }
}

impl EncodeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stroke_width.trim().is_empty() {
            return Err(ConfigError::Validation(
                "encode.stroke_width must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Output naming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Appended to the input file stem: `part.svg` → `part-converted.svg`.
    pub suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: "-converted".to_string(),
        }
    }
}

impl OutputConfig {
    /// # Checks
    /// - `suffix` is non-empty (an empty suffix would overwrite the input)
    /// - `suffix` holds no path separator
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.suffix.is_empty() {
            return Err(ConfigError::Validation(
                "output.suffix must not be empty".into(),
            ));
        }
        if self.suffix.contains(['/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "output.suffix must not contain a path separator: `{}`",
                self.suffix
            )));
        }
        Ok(())
    }
}
