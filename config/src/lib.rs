//! Configuration management for gzh tools.
//!
//! Configuration is stored as YAML. A [`Loader`] searches a list of
//! candidate paths and deserializes the first file it finds, optionally
//! overlaying environment variables on top:
//!
//! ```text
//! GZH_SERVER__PORT=9090   ->   server:
//!                                port: 9090
//! ```
//!
//! The [`env`] module reads single prefixed variables (`GZH_TIMEOUT`,
//! `GZH_DEBUG`, ...) with typed parsing.

mod duration;
pub mod env;
mod error;
mod loader;

pub use duration::{parse_duration, ParseDurationError};
pub use error::{ConfigError, Result};
pub use loader::{default_paths, save, Loader};
