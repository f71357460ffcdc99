#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid collection URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Failed to build HTTP client: {message}")]
    ClientBuild { message: String },

    /// The request never produced a usable response (connect, timeout, decode).
    #[error("{method} {url} failed: {message}")]
    Transport {
        method: &'static str,
        url: String,
        message: String,
    },

    /// A response arrived but not with the status the operation expects.
    #[error("{method} {url} returned unexpected status {status}")]
    UnexpectedStatus {
        method: &'static str,
        url: String,
        status: u16,
    },
}

impl ApiError {
    /// True for failures below the HTTP status level.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }
}
