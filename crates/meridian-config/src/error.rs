//! Configuration error types.

/// Errors that can occur when loading, saving, or parsing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("could not read config file: {0}")]
    Read(#[source] std::io::Error),

    /// The config file or its directory could not be written.
    #[error("could not write config file: {0}")]
    Write(#[source] std::io::Error),

    /// The config file contents are not valid RON.
    #[error("config file is not valid RON: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// The config could not be serialized to RON.
    #[error("could not serialize config: {0}")]
    Serialize(#[source] ron::Error),
}
