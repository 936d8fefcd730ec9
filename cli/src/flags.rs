//! Flag groups shared by gzh commands.
//!
//! Each group derives [`clap::Args`] and is meant to be flattened:
//!
//! ```rust
//! use clap::Parser;
//! use gzh_cli::{GlobalFlags, OutputFlags};
//!
//! #[derive(Parser)]
//! struct Cli {
//!     #[command(flatten)]
//!     global: GlobalFlags,
//!     #[command(flatten)]
//!     output: OutputFlags,
//! }
//!
//! let cli = Cli::parse_from(["tool", "-v", "-f", "json"]);
//! assert!(cli.global.verbose);
//! ```

use std::path::PathBuf;

use clap::Args;
use gzh_logger::{Level, TracingConfig};

use crate::output::OutputFormat;

/// Flags available on every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalFlags {
    /// Enable verbose output
    #[arg(short = 'v', long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Enable debug mode
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Config file path
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GlobalFlags {
    /// Maps the verbosity flags to a log level. `--debug` wins over
    /// `--verbose`, and the default is [`Level::Warn`].
    pub fn log_level(&self) -> Level {
        if self.debug {
            Level::Debug
        } else if self.verbose {
            Level::Info
        } else if self.quiet {
            Level::Error
        } else {
            Level::Warn
        }
    }

    /// Returns the tracing setup implied by these flags. Event targets are
    /// shown in debug mode.
    pub fn tracing_config(&self) -> TracingConfig {
        TracingConfig::new(self.log_level())
            .with_target(self.debug)
            .with_ansi(!self.no_color)
    }
}

/// Output format and destination.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputFlags {
    /// Output format (text, json, yaml, llm)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct DryRunFlags {
    /// Show what would be done without making changes
    #[arg(long)]
    pub dry_run: bool,

    /// Force operation without confirmation
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ConfirmFlags {
    /// Assume yes to all prompts
    #[arg(short = 'y', long)]
    pub yes: bool,
}
