//! Test helpers shared by the gzh crates.
//!
//! - temporary files ([`temp_file`], [`temp_file_in`])
//! - process state guards ([`EnvGuard`], [`CwdGuard`], [`env_lock`])
//! - an in-memory output sink ([`SharedBuffer`])
//! - substring assertions ([`assert_contains!`], [`assert_not_contains!`],
//!   [`assert_err_contains!`])

#[macro_use]
mod assert;
mod buffer;
mod env;
mod fs;

pub use buffer::SharedBuffer;
pub use env::{env_lock, CwdGuard, EnvGuard};
pub use fs::{temp_file, temp_file_in};
