//! # Confswap Core
//!
//! Conversion library for small, human-authored configuration text
//! formats. Three independent domains, each with parse → in-memory model
//! → generate stages:
//!
//! - Java `.properties` ↔ simplified YAML ([`config`])
//! - IDE / dotenv / shell env-variable lists ([`env`])
//! - Docker Compose MySQL/Redis blocks → Spring Boot config ([`compose`])
//!
//! All conversion functions are synchronous and pure: each call reads an
//! input string plus format tag(s) and returns an output string or an
//! error. Malformed input lines are skipped, never fatal, so a successful
//! return is a best-effort conversion of the recognizable subset.
//!
//! ## Example
//!
//! ```
//! use confswap_core::{ConfigFormat, convert_config};
//!
//! let yaml = convert_config(
//!     "server.port=8080",
//!     ConfigFormat::Properties,
//!     ConfigFormat::Yaml,
//! )?;
//! assert_eq!(yaml, "server:\n  port: 8080");
//! # Ok::<(), confswap_core::ConvertError>(())
//! ```

pub mod compose;
pub mod config;
pub mod env;
pub mod error;

// Re-exports
pub use compose::{
    MysqlConfig, RedisConfig, SpringOutput, SpringServiceConfig, compose_to_spring,
    compose_to_spring_tagged, parse_compose_to_service_config, to_spring_env,
    to_spring_properties, to_spring_yaml,
};
pub use config::{
    ConfigFormat, ConfigProperty, convert_config, convert_config_tagged, generate_properties,
    generate_yaml, parse_properties, parse_yaml,
};
pub use env::{EnvFormat, EnvPair, convert, convert_tagged, generate_from_pairs, parse_to_pairs};
pub use error::{ConvertError, Result};
