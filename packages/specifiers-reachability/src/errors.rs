//! Error types for specifiers-reachability
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::specifiers::SpecifierError;

/// Main error type for question resolution
#[derive(Debug, Error)]
pub enum ReachabilityError {
    /// An expression could not be parsed by its specifier factory
    #[error("Invalid specifier for '{field}': '{raw}' ({reason})")]
    InvalidSpecifier {
        field: String,
        raw: String,
        reason: String,
    },

    /// Question JSON could not be bound
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ReachabilityError {
    /// Create an invalid specifier error
    pub fn invalid_specifier(
        field: impl Into<String>,
        raw: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ReachabilityError::InvalidSpecifier {
            field: field.into(),
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Attach the question field name to a factory error
    pub fn from_specifier(field: impl Into<String>, err: SpecifierError) -> Self {
        ReachabilityError::InvalidSpecifier {
            field: field.into(),
            raw: err.raw,
            reason: err.reason,
        }
    }

    /// Field name of an invalid specifier, if this is one
    pub fn field(&self) -> Option<&str> {
        match self {
            ReachabilityError::InvalidSpecifier { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}

/// Result type alias for resolution operations
pub type Result<T> = std::result::Result<T, ReachabilityError>;
