//! `gzhctl config`: show the effective configuration.

use std::path::Path;

use clap::{Args, Subcommand};
use gzh_cli::{Output, OutputFlags};
use gzh_config::Loader;

use crate::{Cli, APP_NAME};

/// Prefix of environment overrides, e.g. `GZH_SERVER__PORT=8080`.
const ENV_PREFIX: &str = "GZH";

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the configuration after environment overrides
    Show(ShowArgs),
    /// List the configuration search paths
    Paths,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub output: OutputFlags,
}

impl ConfigCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let loader = Loader::new(APP_NAME).with_env_prefix(ENV_PREFIX);
        match self {
            ConfigCommand::Show(args) => {
                let config = load(&loader, cli.global.config.as_deref())?;
                Output::from_flags(&args.output)?.print(&config)
            }
            ConfigCommand::Paths => {
                let found = loader.find_config_file();
                let mut out = Output::new();
                for path in loader.paths() {
                    if found.as_deref() == Some(path.as_path()) {
                        out.success(path.display())?;
                    } else {
                        out.line(path.display())?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Loads the config from `path` if given, otherwise from the search paths.
fn load(loader: &Loader, path: Option<&Path>) -> anyhow::Result<serde_yaml::Value> {
    let Some(path) = path else {
        tracing::debug!(paths = ?loader.paths(), "searching for config");
        return Ok(loader.load_or_default()?);
    };
    if !path.is_file() {
        return Err(gzh_errors::Error::file_not_found(path)
            .context("config show")
            .into());
    }
    loader
        .load_from(path)
        .map_err(|err| gzh_errors::Error::from(err).into())
}

#[cfg(test)]
mod tests {
    use gzh_testutil::{env_lock, temp_file, EnvGuard};

    use super::*;

    #[test]
    fn test_load_explicit_path() {
        let _lock = env_lock();
        let (_dir, path) = temp_file("gzhctl.yaml", "server:\n  port: 8080\n").unwrap();
        let loader = Loader::new(APP_NAME).with_env_prefix("GZHCTLTEST");
        let value = load(&loader, Some(&path)).unwrap();
        assert_eq!(value["server"]["port"].as_u64(), Some(8080));
    }

    #[test]
    fn test_load_explicit_path_with_env_override() {
        let _lock = env_lock();
        let _env = EnvGuard::set("GZHCTLTEST_SERVER__HOST", "example.com");
        let (_dir, path) = temp_file("gzhctl.yaml", "server:\n  port: 8080\n").unwrap();
        let loader = Loader::new(APP_NAME).with_env_prefix("GZHCTLTEST");
        let value = load(&loader, Some(&path)).unwrap();
        assert_eq!(value["server"]["host"].as_str(), Some("example.com"));
    }

    #[test]
    fn test_load_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let loader = Loader::new(APP_NAME).with_env_prefix("GZHCTLTEST");
        let err = load(&loader, Some(&dir.path().join("missing.yaml"))).unwrap_err();
        let err = err.downcast_ref::<gzh_errors::Error>().unwrap();
        assert!(err.is_not_found());
    }
}
