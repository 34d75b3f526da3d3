//! Error types for rentify-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for shell operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the marketplace shell
#[derive(Debug, Error)]
pub enum Error {
    /// Route table or navigation error
    #[error(transparent)]
    Router(#[from] rentify_router::Error),

    /// View name not known to the shell
    #[error("Unknown view: {0}")]
    UnknownView(String),

    /// Config file could not be read
    #[error("Failed to read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has the wrong shape
    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Log filter rejected or a subscriber is already installed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}
