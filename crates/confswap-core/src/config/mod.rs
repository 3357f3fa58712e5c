//! Properties/YAML configuration converter.
//!
//! Both formats share one in-memory model: an ordered list of
//! dot-delimited keys with fully unescaped string values. Parsing either
//! format produces that list; generation rebuilds either format from it.

mod properties;
mod yaml;

pub use properties::{generate_properties, parse_properties};
pub use yaml::{generate_yaml, parse_yaml};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConvertError, Result};

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// Java-style `.properties`
    Properties,
    /// Simplified YAML (2-space indentation, scalar leaves only)
    Yaml,
}

impl ConfigFormat {
    /// Resolves a format from its tag string.
    ///
    /// # Returns
    ///
    /// `Some(format)` if the tag is recognized, `None` otherwise.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "properties" => Some(Self::Properties),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Returns the canonical tag for this format.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Properties => "properties",
            Self::Yaml => "yaml",
        }
    }
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single flattened configuration entry.
///
/// `key` is a dot-delimited path (`spring.datasource.url`); `value` is the
/// logical value with all source-format escaping and quoting removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigProperty {
    pub key: String,
    pub value: String,
}

impl ConfigProperty {
    /// Creates a new property.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Converts configuration text between the supported formats.
///
/// Parses with the `from` format, generates with the `to` format. Lines the
/// parser cannot read are skipped, so the output is a best-effort
/// conversion of the recognizable subset of the input.
pub fn convert_config(text: &str, from: ConfigFormat, to: ConfigFormat) -> Result<String> {
    let properties = match from {
        ConfigFormat::Properties => parse_properties(text),
        ConfigFormat::Yaml => parse_yaml(text),
    };

    debug!("parsed {} properties from {} input", properties.len(), from);

    match to {
        ConfigFormat::Properties => Ok(generate_properties(&properties)),
        ConfigFormat::Yaml => generate_yaml(&properties),
    }
}

/// Converts configuration text between formats named by raw tag strings.
///
/// Unknown tags fail with [`ConvertError::UnsupportedFormat`]. Use
/// [`convert_config`] when the formats are already resolved.
pub fn convert_config_tagged(text: &str, from: &str, to: &str) -> Result<String> {
    let from = ConfigFormat::from_tag(from).ok_or_else(|| ConvertError::unsupported(from))?;
    let to = ConfigFormat::from_tag(to).ok_or_else(|| ConvertError::unsupported(to))?;

    convert_config(text, from, to)
}
