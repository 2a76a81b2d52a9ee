//! Configuration validation

use super::error::ConfigResult;

/// Trait for validatable configuration objects
///
/// # Example
/// ```rust,ignore
/// use specifiers_reachability::config::Validatable;
///
/// fn install<C: Validatable>(config: C) -> Result<C, ConfigError> {
///     config.validate()?;
///     Ok(config)
/// }
/// ```
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}
