//! # roster-config
//!
//! TOML configuration types, loading, and validation for the roster client.
//!
//! Single source of truth for `RosterConfig` and the `~/.roster/` path layout.

mod loading;
mod validation;

pub mod errors;
pub mod paths;
pub mod types;

// Public API re-exports
pub use errors::{ConfigError, PathError};
pub use loading::{API_URL_ENV, apply_env_overrides, load_hierarchy_from, merge_configs};
pub use paths::RosterPaths;
pub use types::{
    ApiConfig, DEFAULT_BASE_URL, DEFAULT_TOAST_TTL_MS, NotificationConfig, RosterConfig,
};
pub use validation::validate_config;

impl RosterConfig {
    /// Load configuration from the hierarchy of config files and the environment.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
