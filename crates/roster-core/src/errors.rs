use std::error::Error;

use crate::api::ApiError;
use crate::model::FormError;

/// Base trait for all roster errors
pub trait RosterError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

impl RosterError for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidUrl { .. } => "API_INVALID_URL",
            ApiError::ClientBuild { .. } => "API_CLIENT_BUILD_FAILED",
            ApiError::Transport { .. } => "API_TRANSPORT_FAILED",
            ApiError::UnexpectedStatus { .. } => "API_UNEXPECTED_STATUS",
        }
    }
}

impl RosterError for FormError {
    fn error_code(&self) -> &'static str {
        match self {
            FormError::MissingFields => "FORM_MISSING_FIELDS",
            FormError::InvalidAge { .. } => "FORM_INVALID_AGE",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

impl RosterError for roster_config::ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            roster_config::ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            roster_config::ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            roster_config::ConfigError::PathError { .. } => "CONFIG_PATH_ERROR",
            roster_config::ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            roster_config::ConfigError::ConfigParseError { .. }
                | roster_config::ConfigError::InvalidConfiguration { .. }
        )
    }
}
