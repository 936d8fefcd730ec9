use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::level::Level;

static INIT: Once = Once::new();

/// Settings for the process-wide `tracing` subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Level applied to every target without an override.
    pub level: Level,
    /// Per-target overrides, e.g. `("gzh_config", Level::Debug)`.
    pub targets: Vec<(String, Level)>,
    pub with_target: bool,
    pub ansi: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::Warn,
            targets: Vec::new(),
            with_target: false,
            ansi: true,
        }
    }
}

impl TracingConfig {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    pub fn with_target_level(mut self, target: impl Into<String>, level: Level) -> Self {
        self.targets.push((target.into(), level));
        self
    }

    /// Includes the event target (module path) in each line.
    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Renders the `EnvFilter` directive string, e.g. `info,gzh_config=debug`.
    pub fn filter_directives(&self) -> String {
        let mut directives = directive(self.level).to_string();
        for (target, level) in &self.targets {
            directives.push_str(&format!(",{target}={}", directive(*level)));
        }
        directives
    }
}

fn directive(level: Level) -> &'static str {
    match level {
        Level::Debug => "debug",
        Level::Info => "info",
        Level::Warn => "warn",
        Level::Error => "error",
    }
}

/// Installs a fmt subscriber writing to stderr.
///
/// Only the first call has an effect. `RUST_LOG` takes precedence over the
/// configured levels.
pub fn init_tracing(config: &TracingConfig) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(config.filter_directives())
        };

        // Another subscriber may already be installed, e.g. by a test harness.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(config.with_target)
            .with_ansi(config.ansi)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
