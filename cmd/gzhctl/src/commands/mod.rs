//! gzhctl subcommands.

mod config;
mod inspect;

pub use config::ConfigCommand;
pub use inspect::InspectArgs;
