//! Error types for the converters.
//!
//! Malformed input lines are never errors: every parser skips what it
//! cannot read and returns the recognizable subset. The variants below
//! cover the two conditions that do abort a conversion.

use thiserror::Error;

/// Errors produced by the conversion functions.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A format tag outside the supported set was requested.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A dotted key is used both as a scalar value and as a parent of
    /// other keys, so no nested document can represent the input.
    #[error("key collision: '{key}' is used both as a value and as a parent key")]
    KeyCollision {
        /// The dotted path that collided.
        key: String,
    },
}

impl ConvertError {
    /// Creates an UnsupportedFormat error.
    pub fn unsupported(tag: impl Into<String>) -> Self {
        Self::UnsupportedFormat(tag.into())
    }

    /// Creates a KeyCollision error.
    pub fn key_collision(key: impl Into<String>) -> Self {
        Self::KeyCollision { key: key.into() }
    }

    /// Returns true if this error names an unknown format tag.
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::UnsupportedFormat(_))
    }

    /// Returns true if this error is a leaf/parent key collision.
    pub fn is_key_collision(&self) -> bool {
        matches!(self, Self::KeyCollision { .. })
    }
}

/// Type alias for Results with ConvertError.
pub type Result<T> = std::result::Result<T, ConvertError>;
