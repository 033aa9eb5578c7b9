use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::formatter::color::ColorSetting;

/// Settings for rendering reports, usually read from a TOML file.
///
/// ```toml
/// color = "never"
/// failures_only = true
/// ```
///
/// Missing keys keep their defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[non_exhaustive]
pub struct ReportConfig {
    pub color: ColorSetting,
    pub failures_only: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid report config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ReportConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn with_color(self, color: impl Into<ColorSetting>) -> Self {
        Self {
            color: color.into(),
            ..self
        }
    }

    pub fn with_failures_only(self, failures_only: bool) -> Self {
        Self {
            failures_only,
            ..self
        }
    }
}
