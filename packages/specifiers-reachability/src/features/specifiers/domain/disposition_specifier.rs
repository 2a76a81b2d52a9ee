// Domain: DispositionSpecifier - Which flow outcomes a question asks about
//
// Expression grammar: comma-separated, case-insensitive names. Group names
// `success` and `failure` expand to their members; any single disposition
// name (`accepted`, `denied_in`, ...) stands for itself.

use serde::{Deserialize, Serialize};

use super::error::{SpecifierError, SpecifierKind, SpecifierResult};
use crate::shared::models::Disposition;

const SUCCESS: &str = "success";
const FAILURE: &str = "failure";

/// Symbolic disposition set
///
/// Keeps the expression it was parsed from and its expansion. The expansion
/// is non-empty and holds each disposition once, in first-mentioned order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DispositionSpecifier {
    expression: String,
    dispositions: Vec<Disposition>,
}

impl DispositionSpecifier {
    /// `success`: accepted, delivered to subnet, exits network
    pub fn success() -> Self {
        Self {
            expression: SUCCESS.to_string(),
            dispositions: expand_group(SUCCESS).unwrap_or_default(),
        }
    }

    /// `failure`: every non-success disposition
    pub fn failure() -> Self {
        Self {
            expression: FAILURE.to_string(),
            dispositions: expand_group(FAILURE).unwrap_or_default(),
        }
    }

    pub fn parse(expression: &str) -> SpecifierResult<Self> {
        let error = |reason: String| SpecifierError::new(SpecifierKind::Disposition, expression, reason);

        let mut dispositions: Vec<Disposition> = Vec::new();
        for token in expression.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let expanded = expand_group(token)
                .or_else(|| Disposition::from_name(token).map(|d| vec![d]))
                .ok_or_else(|| error(format!("unknown disposition '{}'", token)))?;
            for disposition in expanded {
                if !dispositions.contains(&disposition) {
                    dispositions.push(disposition);
                }
            }
        }

        if dispositions.is_empty() {
            return Err(error("no dispositions given".to_string()));
        }

        Ok(Self {
            expression: expression.trim().to_string(),
            dispositions,
        })
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Expanded dispositions (unique, not sorted)
    pub fn dispositions(&self) -> &[Disposition] {
        &self.dispositions
    }
}

impl Default for DispositionSpecifier {
    fn default() -> Self {
        Self::success()
    }
}

fn expand_group(name: &str) -> Option<Vec<Disposition>> {
    match name.to_ascii_lowercase().as_str() {
        SUCCESS => Some(Disposition::ALL.iter().copied().filter(|d| d.is_success()).collect()),
        FAILURE => Some(Disposition::ALL.iter().copied().filter(|d| !d.is_success()).collect()),
        _ => None,
    }
}

impl std::fmt::Display for DispositionSpecifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

impl TryFrom<String> for DispositionSpecifier {
    type Error = SpecifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DispositionSpecifier::parse(&value)
    }
}

impl From<DispositionSpecifier> for String {
    fn from(specifier: DispositionSpecifier) -> Self {
        specifier.expression
    }
}
