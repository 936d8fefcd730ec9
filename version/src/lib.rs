//! Build metadata for gzh binaries.
//!
//! Values are captured at compile time from the environment:
//!
//! ```text
//! GZH_VERSION=1.2.0 GZH_GIT_COMMIT=$(git rev-parse HEAD) \
//! GZH_BUILD_DATE=$(date -u +%Y-%m-%dT%H:%M:%SZ) cargo build --release
//! ```
//!
//! [`build_env`] renders that prefix.

use std::fmt;

use serde::Serialize;

/// Version string, `dev` unless `GZH_VERSION` was set at build time.
pub const VERSION: &str = match option_env!("GZH_VERSION") {
    Some(v) => v,
    None => "dev",
};

/// Commit hash, `unknown` unless `GZH_GIT_COMMIT` was set at build time.
pub const GIT_COMMIT: &str = match option_env!("GZH_GIT_COMMIT") {
    Some(v) => v,
    None => UNKNOWN,
};

/// Build date, `unknown` unless `GZH_BUILD_DATE` was set at build time.
pub const BUILD_DATE: &str = match option_env!("GZH_BUILD_DATE") {
    Some(v) => v,
    None => UNKNOWN,
};

const RUST_VERSION: &str = match option_env!("GZH_RUSTC_VERSION") {
    Some(v) => v,
    None => "",
};

const UNKNOWN: &str = "unknown";

/// Length of the abbreviated commit hash in [`Info::full`].
const SHORT_COMMIT_LEN: usize = 7;

/// Version information of the running binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Info {
    pub version: String,
    pub git_commit: String,
    pub build_date: String,
    pub rust_version: String,
    pub platform: String,
}

impl Info {
    /// Returns the values captured when this crate was compiled.
    pub fn current() -> Self {
        Self {
            version: VERSION.to_string(),
            git_commit: GIT_COMMIT.to_string(),
            build_date: BUILD_DATE.to_string(),
            rust_version: RUST_VERSION.to_string(),
            platform: platform(),
        }
    }

    /// Returns info for `version` with unknown commit and build date.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            git_commit: UNKNOWN.to_string(),
            build_date: UNKNOWN.to_string(),
            rust_version: RUST_VERSION.to_string(),
            platform: platform(),
        }
    }

    pub fn with_git_commit(mut self, commit: impl Into<String>) -> Self {
        self.git_commit = commit.into();
        self
    }

    pub fn with_build_date(mut self, date: impl Into<String>) -> Self {
        self.build_date = date.into();
        self
    }

    pub fn with_rust_version(mut self, rust_version: impl Into<String>) -> Self {
        self.rust_version = rust_version.into();
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    /// Returns the bare version.
    pub fn short(&self) -> &str {
        &self.version
    }

    /// Returns `version-abcdef1` when a commit hash is known.
    pub fn full(&self) -> String {
        match self.git_commit.get(..SHORT_COMMIT_LEN) {
            Some(short) if is_known(&self.git_commit) => format!("{}-{short}", self.version),
            _ => self.version.clone(),
        }
    }
}

impl Default for Info {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Version:    {}", self.version)?;
        if is_known(&self.git_commit) {
            write!(f, "\nGit Commit: {}", self.git_commit)?;
        }
        if is_known(&self.build_date) {
            write!(f, "\nBuild Date: {}", self.build_date)?;
        }
        if !self.rust_version.is_empty() {
            write!(f, "\nRust:       {}", self.rust_version)?;
        }
        write!(f, "\nPlatform:   {}", self.platform)
    }
}

fn is_known(value: &str) -> bool {
    !value.is_empty() && value != UNKNOWN
}

fn platform() -> String {
    format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH)
}

/// Renders the environment assignments that stamp a build with the given
/// metadata, to be placed before `cargo build`.
pub fn build_env(version: &str, git_commit: &str, build_date: &str) -> String {
    format!("GZH_VERSION={version} GZH_GIT_COMMIT={git_commit} GZH_BUILD_DATE={build_date}")
}
