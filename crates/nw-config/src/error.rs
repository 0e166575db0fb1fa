//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be parsed or did not match the config shape.
    #[error("configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// The file named with `--config` does not exist.
    #[error("config file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
