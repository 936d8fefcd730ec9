//! Output utilities for CLI tools.

use std::fmt::{self, Display};
use std::fs::File;
use std::io::{self, Write};
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::flags::OutputFlags;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Scalars as-is, structured values as YAML (default).
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
    /// Compact labeled text for language models.
    Llm,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output format {0:?} (expected text, json, yaml or llm)")]
pub struct ParseFormatError(pub String);

impl OutputFormat {
    /// Parses a format name, falling back to [`OutputFormat::Text`].
    pub fn parse(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Llm => "llm",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "llm" => Ok(OutputFormat::Llm),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formatted output to stdout, a file, or any writer.
pub struct Output {
    writer: Box<dyn Write>,
    format: OutputFormat,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl Output {
    /// Creates a text output writing to stdout.
    pub fn new() -> Self {
        Self {
            writer: Box::new(io::stdout()),
            format: OutputFormat::Text,
        }
    }

    /// Creates an output from command line flags, creating the output file
    /// if one was given.
    pub fn from_flags(flags: &OutputFlags) -> anyhow::Result<Self> {
        let output = Self::new().with_format(flags.format);
        match &flags.output {
            Some(path) => {
                let file = File::create(path).map_err(|err| {
                    anyhow::anyhow!("failed to create output file {}: {err}", path.display())
                })?;
                Ok(output.with_writer(file))
            }
            None => Ok(output),
        }
    }

    pub fn set_writer(&mut self, writer: impl Write + 'static) -> &mut Self {
        self.writer = Box::new(writer);
        self
    }

    pub fn with_writer(mut self, writer: impl Write + 'static) -> Self {
        self.set_writer(writer);
        self
    }

    pub fn set_format(&mut self, format: OutputFormat) -> &mut Self {
        self.format = format;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Prints a value in the configured format.
    pub fn print<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        let printed = match self.format {
            OutputFormat::Json => self.print_json(value),
            OutputFormat::Yaml => self.print_yaml(value),
            OutputFormat::Llm => self.print_llm(value),
            OutputFormat::Text => self.print_text(value),
        };
        printed?;
        self.writer.flush()?;
        Ok(())
    }

    fn print_json<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, value)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_yaml<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        serde_yaml::to_writer(&mut self.writer, value)?;
        Ok(())
    }

    /// Writes nothing when the value renders empty.
    fn print_llm<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        let text = gzh_llmfmt::to_string(value)?;
        if !text.is_empty() {
            self.writer.write_all(text.as_bytes())?;
        }
        Ok(())
    }

    fn print_text<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        use serde_json::Value;

        match serde_json::to_value(value) {
            Ok(Value::String(s)) => writeln!(self.writer, "{s}")?,
            Ok(Value::Null) => writeln!(self.writer)?,
            Ok(scalar @ (Value::Bool(_) | Value::Number(_))) => writeln!(self.writer, "{scalar}")?,
            _ => self.print_yaml(value)?,
        }
        Ok(())
    }

    /// Prints `✓ msg`.
    pub fn success(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.writer, "✓ {msg}")
    }

    /// Prints `✗ msg`.
    pub fn error(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.writer, "✗ {msg}")
    }

    /// Prints `⚠ msg`.
    pub fn warning(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.writer, "⚠ {msg}")
    }

    /// Prints `ℹ msg`.
    pub fn info(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.writer, "ℹ {msg}")
    }

    pub fn line(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.writer, "{msg}")
    }

    /// Announces that no changes will be made.
    pub fn dry_run(&mut self) -> io::Result<()> {
        writeln!(self.writer, "[DRY-RUN] No changes will be made")
    }
}
