use std::io;
use std::path::PathBuf;

use gzh_errors::ErrorKind;
use thiserror::Error;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Error type for configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no config file found in paths: {paths:?}")]
    NotFound { paths: Vec<PathBuf> },

    #[error("failed to read config file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("failed to marshal config: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("failed to create config directory: {0}")]
    CreateDir(#[source] io::Error),

    #[error("failed to write config file: {0}")]
    Write(#[source] io::Error),

    #[error("required environment variable not set: {0}")]
    MissingEnv(String),
}

impl ConfigError {
    /// Returns true if no candidate config file existed.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::NotFound { .. })
    }
}

impl From<ConfigError> for gzh_errors::Error {
    fn from(err: ConfigError) -> Self {
        let message = err.to_string();
        match err {
            ConfigError::NotFound { .. } => {
                gzh_errors::Error::new(message).classify(ErrorKind::ConfigNotFound)
            }
            ConfigError::Read { path, source } => gzh_errors::Error::Io(source)
                .context(format!("failed to read config file {}", path.display())),
            ConfigError::CreateDir(source) => {
                gzh_errors::Error::Io(source).context("failed to create config directory")
            }
            ConfigError::Write(source) => {
                gzh_errors::Error::Io(source).context("failed to write config file")
            }
            ConfigError::Parse { .. } | ConfigError::Serialize(_) | ConfigError::MissingEnv(_) => {
                gzh_errors::Error::new(message).classify(ErrorKind::InvalidConfig)
            }
        }
    }
}
