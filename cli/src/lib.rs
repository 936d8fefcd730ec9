//! Command line scaffolding for gzh tools.
//!
//! This crate provides the pieces every gzh binary shares:
//!
//! - flag groups to flatten into clap parsers ([`GlobalFlags`],
//!   [`OutputFlags`], [`DryRunFlags`], [`ConfirmFlags`])
//! - root command construction and execution ([`new_root_command`],
//!   [`execute`])
//! - formatted output in text, JSON, YAML or LLM form ([`Output`])
//! - YAML/JSON document loading ([`load_document`])

pub mod document;
pub mod flags;
pub mod output;
pub mod root;

pub use document::{load_document, load_document_from_reader, parse_document, DocumentError};
pub use flags::{ConfirmFlags, DryRunFlags, GlobalFlags, OutputFlags};
pub use output::{Output, OutputFormat, ParseFormatError};
pub use root::{
    execute, exit_code, exit_status, new_root_command, print_version, render_version, run,
    version_command, RootConfig,
};

#[cfg(test)]
mod tests;
