//! Configuration validation logic.
//!
//! Values are checked once after the hierarchy is merged, before any
//! client is built from them.

use crate::errors::ConfigError;
use crate::types::RosterConfig;

/// Validate a RosterConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - Base URL must use the `http` or `https` scheme, name a host, and parse
///   as a URL (so a bad port or a stray space is caught here)
/// - Notification TTL, if set, must be greater than zero
/// - Request timeout, if set, must be greater than zero
pub fn validate_config(config: &RosterConfig) -> Result<(), ConfigError> {
    let base_url = config.api.base_url();
    let rest = base_url
        .strip_prefix("https://")
        .or_else(|| base_url.strip_prefix("http://"))
        .ok_or_else(|| ConfigError::InvalidConfiguration {
            message: format!(
                "Invalid base_url '{}'. Must start with http:// or https://",
                base_url
            ),
        })?;

    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("Invalid base_url '{}'. Missing host", base_url),
        });
    }

    if let Err(e) = url::Url::parse(base_url) {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("Invalid base_url '{}': {}", base_url, e),
        });
    }

    if config.notifications.ttl_ms == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "notifications.ttl_ms must be greater than 0".to_string(),
        });
    }

    if config.api.timeout_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "api.timeout_secs must be greater than 0".to_string(),
        });
    }

    Ok(())
}
