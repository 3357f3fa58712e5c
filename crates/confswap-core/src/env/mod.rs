//! Environment-variable list conversion.
//!
//! Three dialects of the same data: the raw `KEY=value` lines an IDE run
//! configuration accepts, `.env` files with quoting and inline comments,
//! and shell `export` statements. Parsing normalizes all of them to plain
//! key/value pairs; generation re-applies each dialect's quoting rules.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConvertError, Result};

/// Supported env-variable list dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvFormat {
    /// IntelliJ-style `KEY=value` lines, no quoting
    Idea,
    /// `.env` file syntax
    Dotenv,
    /// Shell `export KEY="value"` statements
    Linux,
}

impl EnvFormat {
    /// Resolves a dialect from its tag string.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "idea" => Some(Self::Idea),
            "dotenv" | "env" => Some(Self::Dotenv),
            "linux" | "shell" | "export" => Some(Self::Linux),
            _ => None,
        }
    }

    /// Returns the canonical tag for this dialect.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Idea => "idea",
            Self::Dotenv => "dotenv",
            Self::Linux => "linux",
        }
    }
}

impl std::fmt::Display for EnvFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvPair {
    pub key: String,
    pub value: String,
}

impl EnvPair {
    /// Creates a new pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Parses env text into ordered key/value pairs.
///
/// Input is split on newlines and `;`. For [`EnvFormat::Linux`] a line
/// holding several `KEY=value` words is additionally split on spaces,
/// respecting single- and double-quote spans. Tokens without `=` or with
/// an empty key are dropped.
pub fn parse_to_pairs(text: &str, format: EnvFormat) -> Vec<EnvPair> {
    let tokens = split_tokens(text, format == EnvFormat::Linux);
    let mut pairs = Vec::new();

    for token in &tokens {
        let cleaned = strip_export_prefix(token);

        let Some(separator) = cleaned.find('=') else {
            continue;
        };
        let key = cleaned[..separator].trim();
        if key.is_empty() {
            continue;
        }
        let mut value = cleaned[separator + 1..].to_string();

        // Inline comments are only honored for unquoted dotenv values.
        if format == EnvFormat::Dotenv {
            let trimmed = value.trim();
            if !trimmed.starts_with('"') && !trimmed.starts_with('\'') {
                if let Some(hash) = trimmed.find('#') {
                    value = trimmed[..hash].to_string();
                }
            }
        }

        pairs.push(EnvPair::new(key, strip_value_quotes(&value)));
    }

    debug!("parsed {} env pairs from {} tokens", pairs.len(), tokens.len());

    pairs
}

/// Generates env text in the requested dialect, one entry per line.
pub fn generate_from_pairs(pairs: &[EnvPair], format: EnvFormat) -> String {
    pairs
        .iter()
        .map(|pair| match format {
            EnvFormat::Idea => format!("{}={}", pair.key, pair.value),
            EnvFormat::Dotenv => format!("{}={}", pair.key, dotenv_value(&pair.value)),
            EnvFormat::Linux => format!("export {}={}", pair.key, shell_value(&pair.value)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Converts env text between dialects.
pub fn convert(text: &str, from: EnvFormat, to: EnvFormat) -> String {
    generate_from_pairs(&parse_to_pairs(text, from), to)
}

/// Converts env text between dialects named by raw tag strings.
///
/// Unknown tags fail with [`ConvertError::UnsupportedFormat`].
pub fn convert_tagged(text: &str, from: &str, to: &str) -> Result<String> {
    let from = EnvFormat::from_tag(from).ok_or_else(|| ConvertError::unsupported(from))?;
    let to = EnvFormat::from_tag(to).ok_or_else(|| ConvertError::unsupported(to))?;

    Ok(convert(text, from, to))
}

fn split_tokens(text: &str, space_separated: bool) -> Vec<String> {
    let mut tokens = Vec::new();

    for piece in text.split(['\n', ';']) {
        let line = piece.trim();
        if line.is_empty() {
            continue;
        }

        if space_separated && line.contains('=') && line.contains(' ') {
            split_quoted_words(line, &mut tokens);
        } else {
            tokens.push(line.to_string());
        }
    }

    tokens
}

// Space splitting that keeps quoted spans intact. A double quote toggles
// double-quote mode only outside single quotes, and symmetrically.
fn split_quoted_words(line: &str, tokens: &mut Vec<String>) {
    let mut current = String::new();
    let mut in_single = false;
    let mut in_double = false;

    for ch in line.chars() {
        match ch {
            '"' if !in_single => {
                in_double = !in_double;
                current.push(ch);
            },
            '\'' if !in_double => {
                in_single = !in_single;
                current.push(ch);
            },
            ' ' if !in_single && !in_double => {
                if !current.trim().is_empty() {
                    tokens.push(current.trim().to_string());
                }
                current.clear();
            },
            _ => current.push(ch),
        }
    }

    if !current.trim().is_empty() {
        tokens.push(current.trim().to_string());
    }
}

fn strip_export_prefix(token: &str) -> &str {
    match token.strip_prefix("export") {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => token,
    }
}

// Strips one layer of matching surrounding quotes, unescaping only the
// quote character of that layer.
fn strip_value_quotes(raw: &str) -> String {
    let value = raw.trim();
    let bytes = value.as_bytes();

    if bytes.len() >= 2 {
        match (bytes[0], bytes[bytes.len() - 1]) {
            (b'"', b'"') => return value[1..value.len() - 1].replace("\\\"", "\""),
            (b'\'', b'\'') => return value[1..value.len() - 1].replace("\\'", "'"),
            _ => {},
        }
    }

    value.to_string()
}

fn needs_quoting(value: &str) -> bool {
    value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '#' | ';' | '"' | '\''))
}

fn dotenv_value(value: &str) -> String {
    if value.is_empty() {
        return "\"\"".to_string();
    }
    if needs_quoting(value) {
        format!("\"{}\"", value.replace('"', "\\\""))
    } else {
        value.to_string()
    }
}

// Shell output always prefers double quotes, structurally needed or not.
fn shell_value(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}
