//! Configuration error types.

use crate::orbits::SceneError;

/// Errors that can occur when loading, saving, or applying configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    /// The scene table is inconsistent.
    #[error("invalid scene: {0}")]
    Scene(#[from] SceneError),

    /// The log level is not one of error, warn, info, debug, trace.
    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),

    /// A setting from the file or the command line is out of range.
    #[error("invalid {field}: {value}")]
    InvalidSetting { field: &'static str, value: String },
}
