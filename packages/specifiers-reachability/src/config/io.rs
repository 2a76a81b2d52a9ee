//! Configuration I/O (YAML loading)
//!
//! Defines the YAML schema. Conversion into `ReachabilityConfig` lives in
//! reachability_config.rs.

use serde::{Deserialize, Serialize};

/// YAML Schema v1
///
/// ```yaml
/// version: 1
/// default_max_traces: 5
/// excluded_dispositions: [LOOP, INSUFFICIENT_INFO]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_max_traces: Option<i32>,

    /// Disposition names, case-insensitive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_dispositions: Option<Vec<String>>,
}

pub(crate) const SUPPORTED_VERSIONS: &[u32] = &[1];
