//! Compose-to-Spring extraction.
//!
//! A narrow reading of Docker Compose documents: only `image:` blocks
//! recognizable as MySQL or Redis services are considered, and only their
//! connection material (host port, credentials, timezone) is kept. The
//! result renders as Spring Boot YAML, properties or env output.

mod scan;
mod spring;

pub use scan::parse_compose_to_service_config;
pub use spring::{
    MysqlConfig, RedisConfig, SpringServiceConfig, to_spring_env, to_spring_properties,
    to_spring_yaml,
};

use crate::error::{ConvertError, Result};

/// Supported Spring output flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpringOutput {
    /// `application.yml` fragment
    Yaml,
    /// Flat `application.properties` lines
    Properties,
    /// `SPRING_*` environment variables
    Env,
}

impl SpringOutput {
    /// Resolves an output flavor from its tag string.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "spring-yaml" | "yaml" | "yml" => Some(Self::Yaml),
            "spring-properties" | "properties" => Some(Self::Properties),
            "spring-env" | "env" => Some(Self::Env),
            _ => None,
        }
    }

    /// Returns the canonical tag for this flavor.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Yaml => "spring-yaml",
            Self::Properties => "spring-properties",
            Self::Env => "spring-env",
        }
    }
}

impl std::fmt::Display for SpringOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Extracts services from Compose text and renders the requested flavor.
pub fn compose_to_spring(text: &str, out: SpringOutput) -> String {
    let config = parse_compose_to_service_config(text);

    match out {
        SpringOutput::Yaml => to_spring_yaml(&config),
        SpringOutput::Properties => to_spring_properties(&config),
        SpringOutput::Env => to_spring_env(&config),
    }
}

/// Same as [`compose_to_spring`], resolving a raw tag string.
///
/// Unknown tags fail with [`ConvertError::UnsupportedFormat`].
pub fn compose_to_spring_tagged(text: &str, out: &str) -> Result<String> {
    let out = SpringOutput::from_tag(out).ok_or_else(|| ConvertError::unsupported(out))?;

    Ok(compose_to_spring(text, out))
}
