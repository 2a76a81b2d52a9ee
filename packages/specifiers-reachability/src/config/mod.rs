//! Configuration System
//!
//! Two levels:
//! - Level 1: `ReachabilityConfig::default()` - built-in engine defaults
//! - Level 2: YAML file (`version: 1`) - team-wide overrides
//!
//! # Examples
//!
//! ```rust,ignore
//! use specifiers_reachability::config::ReachabilityConfig;
//!
//! // Level 1: defaults
//! let config = ReachabilityConfig::default();
//!
//! // Level 1 with overrides
//! let config = ReachabilityConfig::default().default_max_traces(10);
//!
//! // Level 2: YAML
//! let config = ReachabilityConfig::from_yaml("reachability.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod reachability_config;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigExportV1;
pub use reachability_config::{ReachabilityConfig, DEFAULT_MAX_TRACES};
pub use validation::Validatable;
