//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.roster/config.toml`
//! 3. **Project config** - `./.roster/config.toml`
//! 4. **Environment** - `ROSTER_API_URL`
//! 5. **CLI arguments** - `--api-url` (applied by the binary)

use std::fs;
use std::path::Path;

use crate::errors::ConfigError;
use crate::paths::RosterPaths;
use crate::types::{ApiConfig, NotificationConfig, RosterConfig};
use crate::validation::validate_config;

/// Environment variable that overrides `api.base_url`.
pub const API_URL_ENV: &str = "ROSTER_API_URL";

/// Load configuration from the user and project config files plus the environment.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be parsed, or if the
/// merged result fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<RosterConfig, ConfigError> {
    let paths = RosterPaths::resolve()?;
    let project_root = std::env::current_dir()?;
    load_hierarchy_from(&paths, &project_root)
}

/// Load the hierarchy from explicit locations. Use in tests.
pub fn load_hierarchy_from(
    paths: &RosterPaths,
    project_root: &Path,
) -> Result<RosterConfig, ConfigError> {
    let mut config = RosterConfig::default();

    if let Some(user_config) = load_config_file(&paths.user_config())? {
        config = merge_configs(config, user_config);
    }

    if let Some(project_config) = load_config_file(&RosterPaths::project_config(project_root))? {
        config = merge_configs(config, project_config);
    }

    apply_env_overrides(&mut config);
    validate_config(&config)?;

    tracing::debug!(
        event = "config.loading.hierarchy_loaded",
        base_url = config.api.base_url(),
        ttl_ms = config.notifications.ttl().as_millis() as u64,
    );

    Ok(config)
}

/// Apply environment overrides on top of file-based configuration.
pub fn apply_env_overrides(config: &mut RosterConfig) {
    if let Ok(url) = std::env::var(API_URL_ENV)
        && !url.trim().is_empty()
    {
        config.api.base_url = Some(url.trim().to_string());
    }
}

/// Load a configuration file, returning `None` if it does not exist.
fn load_config_file(path: &Path) -> Result<Option<RosterConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(std::io::Error::new(e.kind(), format!("'{}': {}", path.display(), e)).into());
        }
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(Some(config))
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: RosterConfig, override_config: RosterConfig) -> RosterConfig {
    RosterConfig {
        api: ApiConfig {
            base_url: override_config.api.base_url.or(base.api.base_url),
            timeout_secs: override_config.api.timeout_secs.or(base.api.timeout_secs),
        },
        notifications: NotificationConfig {
            ttl_ms: override_config
                .notifications
                .ttl_ms
                .or(base.notifications.ttl_ms),
        },
    }
}
