//! Config file discovery and loading.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::error::{ConfigError, Result};

/// Separates nesting levels in environment override keys.
const ENV_NESTING_SEPARATOR: &str = "__";

/// Loads YAML configuration from the first existing candidate path.
#[derive(Debug, Clone)]
pub struct Loader {
    app_name: String,
    paths: Vec<PathBuf>,
    env_prefix: Option<String>,
}

impl Loader {
    /// Creates a loader searching [`default_paths`] for `app_name`.
    pub fn new(app_name: impl Into<String>) -> Self {
        let app_name = app_name.into();
        let paths = default_paths(&app_name);
        Self {
            app_name,
            paths,
            env_prefix: None,
        }
    }

    /// Replaces the candidate paths.
    pub fn with_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a candidate path with the lowest priority.
    pub fn add_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Inserts a candidate path with the highest priority.
    pub fn prepend_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(0, path.into());
        self
    }

    /// Enables environment overrides: `PREFIX_SECTION__KEY=value` sets
    /// `section.key` in the loaded document.
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Returns the first candidate path that exists.
    pub fn find_config_file(&self) -> Option<PathBuf> {
        self.paths.iter().find(|p| p.exists()).cloned()
    }

    /// Loads the first existing candidate.
    pub fn load<T: DeserializeOwned>(&self) -> Result<T> {
        match self.find_config_file() {
            Some(path) => self.load_from(path),
            None => Err(ConfigError::NotFound {
                paths: self.paths.clone(),
            }),
        }
    }

    /// Loads the first existing candidate, or `T::default()` when there is
    /// none. Environment overrides still apply in the latter case.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self) -> Result<T> {
        if let Some(path) = self.find_config_file() {
            return self.load_from(path);
        }

        tracing::debug!(app = %self.app_name, "no config file found, using defaults");
        let mut doc = Value::Null;
        if self.apply_env_overrides(&mut doc) == 0 {
            return Ok(T::default());
        }
        serde_yaml::from_value(doc).map_err(|source| ConfigError::Parse {
            path: PathBuf::from(format!("<{} environment>", self.app_name)),
            source,
        })
    }

    /// Loads a specific file, ignoring the candidate list.
    pub fn load_from<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> Result<T> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading config");

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let parse_err = |source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        };

        let mut doc: Value = serde_yaml::from_str(&content).map_err(parse_err)?;
        if doc.is_null() {
            doc = Value::Mapping(Mapping::new());
        }
        let applied = self.apply_env_overrides(&mut doc);
        if applied > 0 {
            tracing::debug!(count = applied, "applied environment overrides");
        }
        serde_yaml::from_value(doc).map_err(parse_err)
    }

    /// Overlays matching environment variables, returning how many applied.
    fn apply_env_overrides(&self, doc: &mut Value) -> usize {
        match &self.env_prefix {
            Some(prefix) => overlay_env(doc, prefix, env::vars()),
            None => 0,
        }
    }
}

/// Sets `section.key` in `doc` for every `PREFIX_SECTION__KEY=value` pair.
///
/// Keys are lower-cased and values are parsed as YAML scalars, so `8080`
/// becomes a number and `true` a boolean.
pub(crate) fn overlay_env<I>(doc: &mut Value, prefix: &str, vars: I) -> usize
where
    I: IntoIterator<Item = (String, String)>,
{
    let prefix = format!("{prefix}_");
    let mut applied = 0;
    for (key, raw) in vars {
        let Some(name) = key.strip_prefix(&prefix) else {
            continue;
        };
        if raw.is_empty() {
            continue;
        }
        let segments: Vec<String> = name
            .split(ENV_NESTING_SEPARATOR)
            .map(str::to_lowercase)
            .collect();
        if segments.iter().any(String::is_empty) {
            continue;
        }
        let value =
            serde_yaml::from_str::<Value>(&raw).unwrap_or_else(|_| Value::String(raw.clone()));
        set_path(doc, &segments, value);
        applied += 1;
    }
    applied
}

fn set_path(doc: &mut Value, segments: &[String], value: Value) {
    let Some((last, parents)) = segments.split_last() else {
        return;
    };
    let mut node = doc;
    for segment in parents {
        node = as_mapping(node)
            .entry(Value::String(segment.clone()))
            .or_insert(Value::Null);
    }
    as_mapping(node).insert(Value::String(last.clone()), value);
}

/// Returns the node as a mapping, replacing any non-mapping value.
fn as_mapping(node: &mut Value) -> &mut Mapping {
    if !node.is_mapping() {
        *node = Value::Mapping(Mapping::new());
    }
    match node {
        Value::Mapping(map) => map,
        _ => unreachable!("node was just replaced with a mapping"),
    }
}

/// Candidate config paths for `app_name`, in priority order:
///
/// 1. `app.yaml`, `app.yml`, `.app.yaml`, `.app.yml` in the working directory
/// 2. `$XDG_CONFIG_HOME/app/config.yaml` and `.yml`
/// 3. `~/.config/app/config.yaml` and `.yml`, then `~/.app.yaml` and `.yml`
pub fn default_paths(app_name: &str) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = vec![
        format!("{app_name}.yaml").into(),
        format!("{app_name}.yml").into(),
        format!(".{app_name}.yaml").into(),
        format!(".{app_name}.yml").into(),
    ];

    if let Some(config_dir) = env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        let dir = PathBuf::from(config_dir).join(app_name);
        paths.push(dir.join("config.yaml"));
        paths.push(dir.join("config.yml"));
    }

    if let Some(home) = dirs::home_dir() {
        let dir = home.join(".config").join(app_name);
        paths.push(dir.join("config.yaml"));
        paths.push(dir.join("config.yml"));
        paths.push(home.join(format!(".{app_name}.yaml")));
        paths.push(home.join(format!(".{app_name}.yml")));
    }

    paths
}

/// Writes `config` as YAML, creating parent directories as needed.
pub fn save<T: Serialize + ?Sized>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();
    let content = serde_yaml::to_string(config).map_err(ConfigError::Serialize)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(ConfigError::CreateDir)?;
    }
    fs::write(path, content).map_err(ConfigError::Write)?;
    tracing::debug!(path = %path.display(), "saved config");
    Ok(())
}
