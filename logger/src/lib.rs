//! Logging for gzh tools.
//!
//! Two layers live here:
//!
//! - [`Logger`] handles ([`SimpleLogger`], [`NopLogger`]) that write
//!   human-readable lines to an explicit sink. There is no process-wide
//!   default; callers pass the handle they want to use.
//! - [`init_tracing`], which installs a `tracing` subscriber for the
//!   diagnostics the library crates emit through `tracing` macros.
//!
//! ```rust
//! use gzh_logger::{Level, Logger, SimpleLogger};
//!
//! let logger = SimpleLogger::new("sync");
//! logger.set_level(Level::Debug);
//! let repo = logger.with_context("repo", &"gzh-cli");
//! repo.info("cloned", &[("files", &42)]);
//! ```

mod level;
mod logger;
mod tracing_init;

pub use level::{Level, ParseLevelError};
pub use logger::{Fields, Logger, NopLogger, SimpleLogger};
pub use tracing_init::{init_tracing, TracingConfig};
