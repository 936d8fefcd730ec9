//! Prefixed environment variable helpers.
//!
//! Every helper takes an optional prefix. `None` uses [`DEFAULT_ENV_PREFIX`],
//! `Some("")` reads the key as-is, and any other prefix is joined with `_`:
//! `get_env("TIMEOUT", None)` reads `GZH_TIMEOUT`.

use std::env;
use std::time::Duration;

use crate::duration::parse_duration;
use crate::error::{ConfigError, Result};

/// Prefix used when none is given.
pub const DEFAULT_ENV_PREFIX: &str = "GZH";

/// Returns the full variable name for `key`.
pub fn env_key(key: &str, prefix: Option<&str>) -> String {
    match prefix.unwrap_or(DEFAULT_ENV_PREFIX) {
        "" => key.to_string(),
        p => format!("{p}_{key}"),
    }
}

/// Returns the variable's value, if set.
pub fn lookup_env(key: &str, prefix: Option<&str>) -> Option<String> {
    env::var(env_key(key, prefix)).ok()
}

/// Returns the variable's value, or an empty string if unset.
pub fn get_env(key: &str, prefix: Option<&str>) -> String {
    lookup_env(key, prefix).unwrap_or_default()
}

/// Returns the variable's value, or `default` if unset or empty.
pub fn get_env_or(key: &str, default: &str, prefix: Option<&str>) -> String {
    non_empty(key, prefix).unwrap_or_else(|| default.to_string())
}

/// Returns true for `true`, `1`, `yes` or `on`, case-insensitively.
pub fn get_env_bool(key: &str, prefix: Option<&str>) -> bool {
    is_truthy(&get_env(key, prefix))
}

/// Like [`get_env_bool`], but returns `default` if unset or empty.
pub fn get_env_bool_or(key: &str, default: bool, prefix: Option<&str>) -> bool {
    non_empty(key, prefix).map_or(default, |v| is_truthy(&v))
}

/// Parses the variable as an integer.
pub fn get_env_int(key: &str, prefix: Option<&str>) -> Option<i64> {
    non_empty(key, prefix)?.parse().ok()
}

pub fn get_env_int_or(key: &str, default: i64, prefix: Option<&str>) -> i64 {
    get_env_int(key, prefix).unwrap_or(default)
}

/// Parses the variable as a duration string such as `30s` or `1h30m`.
pub fn get_env_duration(key: &str, prefix: Option<&str>) -> Option<Duration> {
    parse_duration(&non_empty(key, prefix)?).ok()
}

pub fn get_env_duration_or(key: &str, default: Duration, prefix: Option<&str>) -> Duration {
    get_env_duration(key, prefix).unwrap_or(default)
}

/// Splits the variable on commas, trimming items and dropping empty ones.
pub fn get_env_list(key: &str, prefix: Option<&str>) -> Vec<String> {
    get_env(key, prefix)
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns the variable's value, failing if it is unset or empty.
pub fn require_env(key: &str, prefix: Option<&str>) -> Result<String> {
    non_empty(key, prefix).ok_or_else(|| ConfigError::MissingEnv(env_key(key, prefix)))
}

fn non_empty(key: &str, prefix: Option<&str>) -> Option<String> {
    lookup_env(key, prefix).filter(|v| !v.is_empty())
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
