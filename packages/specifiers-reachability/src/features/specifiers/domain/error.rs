//! Specifier factory errors

use std::fmt;
use thiserror::Error;

/// Which kind of expression failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecifierKind {
    Node,
    Location,
    IpSpace,
    Disposition,
}

impl SpecifierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecifierKind::Node => "node",
            SpecifierKind::Location => "location",
            SpecifierKind::IpSpace => "ip_space",
            SpecifierKind::Disposition => "disposition",
        }
    }
}

impl fmt::Display for SpecifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Expression could not be turned into a specifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{kind}] cannot parse '{raw}': {reason}")]
pub struct SpecifierError {
    pub kind: SpecifierKind,
    pub raw: String,
    pub reason: String,
}

impl SpecifierError {
    pub fn new(kind: SpecifierKind, raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for factories
pub type SpecifierResult<T> = std::result::Result<T, SpecifierError>;
