#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Could not resolve config location: {source}")]
    PathError {
        #[from]
        source: PathError,
    },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found; set $HOME environment variable")]
    HomeNotFound,
}
