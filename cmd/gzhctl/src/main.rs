//! gzhctl - inspect gzh configuration and documents.
//!
//! ```text
//! gzhctl version
//! gzhctl config show -f yaml
//! gzhctl config paths
//! gzhctl inspect request.yaml
//! cat request.json | gzhctl inspect - -f yaml
//! ```

use std::io;
use std::process::ExitCode;

use clap::{ArgMatches, Args, Command, FromArgMatches, Subcommand};
use gzh_cli::{GlobalFlags, RootConfig};
use gzh_logger::init_tracing;
use gzh_version::Info;

mod commands;

use commands::{ConfigCommand, InspectArgs};

const APP_NAME: &str = "gzhctl";

/// Flags and subcommands parsed on top of the root command.
#[derive(Args, Debug)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print a YAML or JSON document in another format
    Inspect(InspectArgs),
}

fn root_command() -> Command {
    let cfg = RootConfig::new(APP_NAME)
        .with_short("Inspect gzh configuration and documents")
        .with_version(gzh_version::VERSION);
    let cmd = Cli::augment_args(gzh_cli::new_root_command(&cfg));
    cmd.subcommand(gzh_cli::version_command(&Info::current()))
}

fn dispatch(matches: &ArgMatches, mut help: Command) -> anyhow::Result<()> {
    if matches.subcommand_name() == Some("version") {
        gzh_cli::print_version(&mut io::stdout(), &Info::current())?;
        return Ok(());
    }

    let cli = Cli::from_arg_matches(matches)?;
    init_tracing(&cli.global.tracing_config());
    tracing::debug!(level = %cli.global.log_level(), "starting {APP_NAME}");

    match &cli.command {
        Some(Commands::Config(cmd)) => cmd.run(&cli),
        Some(Commands::Inspect(args)) => args.run(),
        None => {
            help.print_help()?;
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cmd = root_command();
    let help = cmd.clone();
    gzh_cli::execute(cmd, std::env::args_os(), |matches| dispatch(matches, help))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_command_is_valid() {
        root_command().debug_assert();
    }

    #[test]
    fn test_parse_inspect_defaults_to_llm() {
        let matches = root_command()
            .try_get_matches_from(["gzhctl", "inspect", "doc.yaml"])
            .unwrap();
        let cli = Cli::from_arg_matches(&matches).unwrap();
        match cli.command {
            Some(Commands::Inspect(args)) => {
                assert_eq!(args.file.to_str(), Some("doc.yaml"));
                assert_eq!(args.format, gzh_cli::OutputFormat::Llm);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_config_show_with_global_flags() {
        let matches = root_command()
            .try_get_matches_from(["gzhctl", "config", "show", "-f", "json", "--debug"])
            .unwrap();
        let cli = Cli::from_arg_matches(&matches).unwrap();
        assert!(cli.global.debug);
        match cli.command {
            Some(Commands::Config(ConfigCommand::Show(args))) => {
                assert_eq!(args.output.format, gzh_cli::OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_version_subcommand_is_not_derived() {
        let matches = root_command()
            .try_get_matches_from(["gzhctl", "version"])
            .unwrap();
        assert_eq!(matches.subcommand_name(), Some("version"));
        let cli = Cli::from_arg_matches(&matches).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_version_flag() {
        let mut out = Vec::new();
        gzh_cli::run(root_command(), ["gzhctl", "--version"], &mut out, |_| {
            panic!("handler must not run")
        })
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("gzhctl version {}\n", gzh_version::VERSION));
    }
}
