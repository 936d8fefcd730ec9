//! Error handling for gzh tools.
//!
//! A single [`Error`] enum covers the well-known failure classes
//! ([`ErrorKind`]), context wrapping, and the validation messages command
//! line tools produce. Wrapping keeps the source chain intact so
//! [`Error::is`] can find a classification at any layer.

mod error;
mod kind;

pub use error::{join, Error, Result, ResultExt};
pub use kind::ErrorKind;
