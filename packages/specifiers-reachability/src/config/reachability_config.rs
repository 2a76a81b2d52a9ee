//! Reachability resolution settings

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, SUPPORTED_VERSIONS};
use super::validation::Validatable;
use crate::shared::models::Disposition;

/// Traces kept per flow when the question does not say otherwise
pub const DEFAULT_MAX_TRACES: i32 = 1;

const MAX_TRACES_LIMIT: i32 = 10_000;

/// Engine-facing defaults applied while resolving questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReachabilityConfig {
    /// Fills `maxTraces` when a question omits it
    pub default_max_traces: i32,

    /// Dispositions the engine cannot search for; dropped from resolved action sets
    pub excluded_dispositions: BTreeSet<Disposition>,
}

impl Default for ReachabilityConfig {
    fn default() -> Self {
        Self {
            default_max_traces: DEFAULT_MAX_TRACES,
            excluded_dispositions: BTreeSet::from([Disposition::Loop]),
        }
    }
}

impl ReachabilityConfig {
    /// Builder: default trace count
    pub fn default_max_traces(mut self, max_traces: i32) -> Self {
        self.default_max_traces = max_traces;
        self
    }

    /// Builder: replace the excluded disposition set
    pub fn excluded_dispositions(
        mut self,
        dispositions: impl IntoIterator<Item = Disposition>,
    ) -> Self {
        self.excluded_dispositions = dispositions.into_iter().collect();
        self
    }

    /// Whether the engine can search for this disposition
    pub fn is_actionable(&self, disposition: Disposition) -> bool {
        !self.excluded_dispositions.contains(&disposition)
    }

    /// Load from a versioned YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading reachability config");
        Self::from_yaml_str(&content)
    }

    /// Load from YAML text
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(yaml)?;
        Self::from_export(export)
    }

    /// Serialize as a v1 YAML document
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(&self.to_export())?)
    }

    fn from_export(export: ConfigExportV1) -> ConfigResult<Self> {
        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let mut config = Self::default();
        if let Some(max_traces) = export.default_max_traces {
            config.default_max_traces = max_traces;
        }
        if let Some(names) = export.excluded_dispositions {
            config.excluded_dispositions = parse_dispositions(&names)?;
        }

        config.validate()?;
        Ok(config)
    }

    fn to_export(&self) -> ConfigExportV1 {
        ConfigExportV1 {
            version: Some(1),
            default_max_traces: Some(self.default_max_traces),
            excluded_dispositions: Some(
                self.excluded_dispositions
                    .iter()
                    .map(|d| d.as_str().to_string())
                    .collect(),
            ),
        }
    }
}

fn parse_dispositions(names: &[String]) -> ConfigResult<BTreeSet<Disposition>> {
    names
        .iter()
        .map(|name| {
            Disposition::from_name(name).ok_or_else(|| {
                let valid: Vec<&str> = Disposition::ALL.iter().map(|d| d.as_str()).collect();
                ConfigError::unknown_disposition_with_suggestion(name.as_str(), &valid)
            })
        })
        .collect()
}

impl Validatable for ReachabilityConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !(1..=MAX_TRACES_LIMIT).contains(&self.default_max_traces) {
            return Err(ConfigError::range_with_hint(
                format!("{}.default_max_traces", self.config_name()),
                self.default_max_traces,
                1,
                MAX_TRACES_LIMIT,
                "At least one trace must be kept per flow",
            ));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "ReachabilityConfig"
    }
}
