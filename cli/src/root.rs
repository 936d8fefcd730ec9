//! Root command construction and execution.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use gzh_version::Info;

/// Version output used when [`RootConfig::version_template`] is unset.
pub const DEFAULT_VERSION_TEMPLATE: &str = "{name} version {version}\n";

const VERSION_ARG: &str = "version";

/// Exit status for usage errors reported by clap.
const USAGE_ERROR_STATUS: u8 = 2;

/// Describes a tool's root command.
#[derive(Debug, Clone, Default)]
pub struct RootConfig {
    pub name: String,
    pub short: String,
    pub long: String,
    /// Enables `-V/--version` when non-empty.
    pub version: String,
    /// Output of `--version`; `{name}` and `{version}` are substituted.
    pub version_template: Option<String>,
}

impl RootConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_short(mut self, short: impl Into<String>) -> Self {
        self.short = short.into();
        self
    }

    pub fn with_long(mut self, long: impl Into<String>) -> Self {
        self.long = long.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_version_template(mut self, template: impl Into<String>) -> Self {
        self.version_template = Some(template.into());
        self
    }
}

/// Renders the `--version` output for a root command.
pub fn render_version(cfg: &RootConfig) -> String {
    cfg.version_template
        .as_deref()
        .unwrap_or(DEFAULT_VERSION_TEMPLATE)
        .replace("{name}", &cfg.name)
        .replace("{version}", &cfg.version)
}

/// Builds the root command. Subcommands and arguments are added by the
/// caller, either through the builder API or `Args::augment_args`.
pub fn new_root_command(cfg: &RootConfig) -> Command {
    let mut cmd = Command::new(cfg.name.clone());
    if !cfg.short.is_empty() {
        cmd = cmd.about(cfg.short.clone());
    }
    if !cfg.long.is_empty() {
        cmd = cmd.long_about(cfg.long.clone());
    }
    if !cfg.version.is_empty() {
        cmd = cmd
            .version(cfg.version.clone())
            .long_version(render_version(cfg))
            .disable_version_flag(true)
            .arg(
                Arg::new(VERSION_ARG)
                    .short('V')
                    .long("version")
                    .action(ArgAction::SetTrue)
                    .help("Print version"),
            );
    }
    cmd
}

/// Builds a `version` subcommand describing `info`.
pub fn version_command(info: &Info) -> Command {
    Command::new("version")
        .about("Print version information")
        .long_about(info.to_string())
}

/// Writes the extended version block followed by a newline.
pub fn print_version(out: &mut dyn Write, info: &Info) -> io::Result<()> {
    writeln!(out, "{info}")
}

/// Parses `args` and dispatches to `handler`.
///
/// Help and version requests are written to `out` and return `Ok`; usage
/// errors are returned as [`clap::Error`].
pub fn run<I, T, F>(cmd: Command, args: I, out: &mut dyn Write, handler: F) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    F: FnOnce(&ArgMatches) -> anyhow::Result<()>,
{
    let version = cmd.get_long_version().map(str::to_string);

    let matches = match cmd.try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", err.render())?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let wants_version = matches
        .try_get_one::<bool>(VERSION_ARG)
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false);
    if let (true, Some(version)) = (wants_version, version) {
        write!(out, "{version}")?;
        return Ok(());
    }

    handler(&matches)
}

/// Runs the command against stdout and converts the outcome to an exit code.
pub fn execute<I, T, F>(cmd: Command, args: I, handler: F) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    F: FnOnce(&ArgMatches) -> anyhow::Result<()>,
{
    exit_code(run(cmd, args, &mut io::stdout(), handler))
}

/// Returns 0 on success, 2 for usage errors and 1 for anything else.
pub fn exit_status(result: &anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) if err.downcast_ref::<clap::Error>().is_some() => USAGE_ERROR_STATUS,
        Err(_) => 1,
    }
}

/// Reports an error on stderr and converts the result to an exit code.
pub fn exit_code(result: anyhow::Result<()>) -> ExitCode {
    if let Err(err) = &result {
        match err.downcast_ref::<clap::Error>() {
            Some(usage) => {
                let _ = usage.print();
            }
            None => eprintln!("Error: {err:#}"),
        }
    }
    ExitCode::from(exit_status(&result))
}
