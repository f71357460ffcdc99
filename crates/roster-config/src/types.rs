use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Collection endpoint used when no config file or override sets one.
pub const DEFAULT_BASE_URL: &str = "https://6909a7b12d902d0651b49b1c.mockapi.io/students";

/// How long a notification stays visible before it expires.
pub const DEFAULT_TOAST_TTL_MS: u64 = 5000;

/// Top-level roster configuration.
///
/// Every leaf is optional so that user and project files can be merged
/// field by field; the accessor methods supply the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Remote student collection settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the student collection (list/create target).
    #[serde(default)]
    pub base_url: Option<String>,
    /// Per-request timeout. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Toast notification settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default)]
    pub ttl_ms: Option<u64>,
}

impl NotificationConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms.unwrap_or(DEFAULT_TOAST_TTL_MS))
    }
}
