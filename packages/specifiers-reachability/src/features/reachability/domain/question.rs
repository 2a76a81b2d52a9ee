// Domain: SpecifiersReachabilityQuestion - "which flows can go from here to there?"
//
// Immutable once built. Every field has a default, substituted when the
// question is constructed (from options or from JSON), never later.

use serde::{Deserialize, Serialize};

use super::header_constraints::PacketHeaderConstraints;
use super::path_constraints::PathConstraintsInput;
use crate::config::ReachabilityConfig;
use crate::errors::{ReachabilityError, Result};
use crate::features::specifiers::DispositionSpecifier;

pub const ACTIONS_FIELD: &str = "actions";

/// Question metadata shared by every question type
pub trait Question {
    /// Stable question name
    fn name(&self) -> &'static str;

    /// Whether answering needs the computed data plane
    fn requires_data_plane(&self) -> bool;
}

/// Named optional question fields; absent fields take their defaults
///
/// Also the wire shape of a question (camelCase, `null` = absent).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct QuestionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<DispositionSpecifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<PacketHeaderConstraints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_filters: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_traces: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_constraints: Option<PathConstraintsInput>,
}

/// JSON binding with `actions` kept raw, so a bad expression is reported
/// against its field instead of as a JSON error
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
struct QuestionJson {
    actions: Option<String>,
    headers: Option<PacketHeaderConstraints>,
    ignore_filters: Option<bool>,
    max_traces: Option<i32>,
    path_constraints: Option<PathConstraintsInput>,
}

/// Reachability question over symbolic specifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "QuestionOptions", into = "QuestionOptions")]
pub struct SpecifiersReachabilityQuestion {
    actions: DispositionSpecifier,
    headers: PacketHeaderConstraints,
    ignore_filters: bool,
    max_traces: i32,
    path_constraints: PathConstraintsInput,
}

impl SpecifiersReachabilityQuestion {
    pub const NAME: &'static str = "specifiersReachability";

    /// Build with built-in defaults for absent fields
    pub fn new(options: QuestionOptions) -> Self {
        Self::with_config(options, &ReachabilityConfig::default())
    }

    /// Build with `max_traces` defaulting to the configured value
    pub fn with_config(options: QuestionOptions, config: &ReachabilityConfig) -> Self {
        Self {
            actions: options.actions.unwrap_or_default(),
            headers: options.headers.unwrap_or_default(),
            ignore_filters: options.ignore_filters.unwrap_or(false),
            max_traces: options.max_traces.unwrap_or(config.default_max_traces),
            path_constraints: options.path_constraints.unwrap_or_default(),
        }
    }

    /// Parse question JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let bound: QuestionJson = serde_json::from_str(json)?;
        let actions = bound
            .actions
            .as_deref()
            .map(DispositionSpecifier::parse)
            .transpose()
            .map_err(|e| ReachabilityError::from_specifier(ACTIONS_FIELD, e))?;

        Ok(Self::new(QuestionOptions {
            actions,
            headers: bound.headers,
            ignore_filters: bound.ignore_filters,
            max_traces: bound.max_traces,
            path_constraints: bound.path_constraints,
        }))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn actions(&self) -> &DispositionSpecifier {
        &self.actions
    }

    pub fn headers(&self) -> &PacketHeaderConstraints {
        &self.headers
    }

    pub fn ignore_filters(&self) -> bool {
        self.ignore_filters
    }

    pub fn max_traces(&self) -> i32 {
        self.max_traces
    }

    pub fn path_constraints(&self) -> &PathConstraintsInput {
        &self.path_constraints
    }
}

impl Default for SpecifiersReachabilityQuestion {
    fn default() -> Self {
        Self::new(QuestionOptions::default())
    }
}

impl Question for SpecifiersReachabilityQuestion {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn requires_data_plane(&self) -> bool {
        true
    }
}

impl From<QuestionOptions> for SpecifiersReachabilityQuestion {
    fn from(options: QuestionOptions) -> Self {
        Self::new(options)
    }
}

impl From<SpecifiersReachabilityQuestion> for QuestionOptions {
    fn from(question: SpecifiersReachabilityQuestion) -> Self {
        Self {
            actions: Some(question.actions),
            headers: Some(question.headers),
            ignore_filters: Some(question.ignore_filters),
            max_traces: Some(question.max_traces),
            path_constraints: Some(question.path_constraints),
        }
    }
}
