// Domain: path constraints - where flows start, end, must pass and must not pass
//
// Start and end always have an expression (default "all"). Transit and
// forbidden are Option: a missing expression means "no constraint", which is
// not the same as an expression that selects every node.

use serde::{Deserialize, Deserializer, Serialize};

use crate::features::specifiers::{LocationSpecifier, NodeSpecifier};

/// Expression selecting every location or node
pub const ALL_LOCATIONS: &str = "all";

fn all_locations() -> String {
    ALL_LOCATIONS.to_string()
}

fn string_or_all<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(all_locations))
}

/// Path constraint expressions as supplied by the question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PathConstraintsInput {
    #[serde(default = "all_locations", deserialize_with = "string_or_all")]
    pub start_location: String,
    #[serde(default = "all_locations", deserialize_with = "string_or_all")]
    pub end_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit_locations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forbidden_locations: Option<String>,
}

impl PathConstraintsInput {
    /// Start and end everywhere, nothing required or forbidden
    pub fn unconstrained() -> Self {
        Self {
            start_location: all_locations(),
            end_location: all_locations(),
            transit_locations: None,
            forbidden_locations: None,
        }
    }

    pub fn start_location(mut self, expression: impl Into<String>) -> Self {
        self.start_location = expression.into();
        self
    }

    pub fn end_location(mut self, expression: impl Into<String>) -> Self {
        self.end_location = expression.into();
        self
    }

    pub fn transit_locations(mut self, expression: impl Into<String>) -> Self {
        self.transit_locations = Some(expression.into());
        self
    }

    pub fn forbidden_locations(mut self, expression: impl Into<String>) -> Self {
        self.forbidden_locations = Some(expression.into());
        self
    }
}

impl Default for PathConstraintsInput {
    fn default() -> Self {
        Self::unconstrained()
    }
}

/// Resolved path constraints
///
/// `transit_locations` / `forbidden_locations` are `Some` only when the
/// question supplied an expression for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathConstraints {
    pub start_location: LocationSpecifier,
    pub end_location: NodeSpecifier,
    pub transit_locations: Option<NodeSpecifier>,
    pub forbidden_locations: Option<NodeSpecifier>,
}
