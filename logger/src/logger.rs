use std::fmt::{self, Display};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::level::Level;

/// Key-value pairs attached to a single log call.
pub type Fields<'a> = &'a [(&'a str, &'a dyn Display)];

/// A leveled logger.
pub trait Logger: Send + Sync {
    /// Writes a message if `level` is at or above the logger's level.
    fn log(&self, level: Level, msg: &str, fields: Fields<'_>);

    /// Returns a logger that prefixes every line with `key=value`.
    fn with_context(&self, key: &str, value: &dyn Display) -> Box<dyn Logger>;

    fn level(&self) -> Level;

    fn set_level(&self, level: Level);

    fn debug(&self, msg: &str, fields: Fields<'_>) {
        self.log(Level::Debug, msg, fields);
    }

    fn info(&self, msg: &str, fields: Fields<'_>) {
        self.log(Level::Info, msg, fields);
    }

    fn warn(&self, msg: &str, fields: Fields<'_>) {
        self.log(Level::Warn, msg, fields);
    }

    fn error(&self, msg: &str, fields: Fields<'_>) {
        self.log(Level::Error, msg, fields);
    }
}

type Sink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Writes `[YYYY-MM-DD HH:MM:SS] LEVEL [name] k=v msg k=v` lines.
///
/// Clones share the level and the sink. Loggers derived through
/// [`Logger::with_context`] share the sink but get their own copy of the
/// level and context.
#[derive(Clone)]
pub struct SimpleLogger {
    name: String,
    level: Arc<Mutex<Level>>,
    context: Vec<(String, String)>,
    sink: Sink,
}

impl SimpleLogger {
    /// Creates a logger writing to stdout at [`Level::Info`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: Arc::new(Mutex::new(Level::Info)),
            context: Vec::new(),
            sink: Arc::new(Mutex::new(Box::new(io::stdout()))),
        }
    }

    /// Sets the output destination of this handle.
    pub fn set_output(&mut self, writer: impl Write + Send + 'static) {
        self.sink = Arc::new(Mutex::new(Box::new(writer)));
    }

    /// Builder form of [`SimpleLogger::set_output`].
    pub fn with_output(mut self, writer: impl Write + Send + 'static) -> Self {
        self.set_output(writer);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn format_line(&self, level: Level, msg: &str, fields: Fields<'_>) -> String {
        let mut line = format!(
            "[{}] {} [{}]",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            level,
            self.name
        );
        for (key, value) in &self.context {
            line.push_str(&format!(" {key}={value}"));
        }
        line.push(' ');
        line.push_str(msg);
        for (key, value) in fields {
            line.push_str(&format!(" {key}={value}"));
        }
        line.push('\n');
        line
    }

    fn current_level(&self) -> MutexGuard<'_, Level> {
        self.level.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for SimpleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleLogger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl Logger for SimpleLogger {
    fn log(&self, level: Level, msg: &str, fields: Fields<'_>) {
        if level < self.level() {
            return;
        }
        let line = self.format_line(level, msg, fields);
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        // Write failures are dropped; logging must not fail the caller.
        let _ = sink.write_all(line.as_bytes());
    }

    fn with_context(&self, key: &str, value: &dyn Display) -> Box<dyn Logger> {
        let mut context = self.context.clone();
        let value = value.to_string();
        match context.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => context.push((key.to_string(), value)),
        }
        Box::new(SimpleLogger {
            name: self.name.clone(),
            level: Arc::new(Mutex::new(self.level())),
            context,
            sink: Arc::clone(&self.sink),
        })
    }

    fn level(&self) -> Level {
        *self.current_level()
    }

    fn set_level(&self, level: Level) {
        *self.current_level() = level;
    }
}

/// A logger that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopLogger;

impl NopLogger {
    pub fn new() -> Self {
        NopLogger
    }
}

impl Logger for NopLogger {
    fn log(&self, _level: Level, _msg: &str, _fields: Fields<'_>) {}

    fn with_context(&self, _key: &str, _value: &dyn Display) -> Box<dyn Logger> {
        Box::new(NopLogger)
    }

    fn level(&self) -> Level {
        Level::Error
    }

    fn set_level(&self, _level: Level) {}
}
