//! Error type for the serde boundary.

use std::fmt::Display;

use thiserror::Error;

/// Result type alias for value conversion.
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised while converting a `Serialize` type into a [`Value`](crate::Value).
#[derive(Debug, Error)]
pub enum Error {
    /// Error reported by a `Serialize` implementation.
    #[error("{0}")]
    Custom(String),
}

impl serde::ser::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}
