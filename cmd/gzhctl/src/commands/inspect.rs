//! `gzhctl inspect`: print a YAML or JSON document in another format.

use std::io;
use std::path::PathBuf;

use clap::Args;
use gzh_cli::{load_document, load_document_from_reader, Output, OutputFlags, OutputFormat};

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Document to read, `-` for stdin
    pub file: PathBuf,

    /// Output format (text, json, yaml, llm)
    #[arg(short = 'f', long, default_value = "llm")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl InspectArgs {
    pub fn run(&self) -> anyhow::Result<()> {
        let doc = self.read()?;
        let flags = OutputFlags {
            format: self.format,
            output: self.output.clone(),
        };
        Output::from_flags(&flags)?.print(&doc)
    }

    fn read(&self) -> anyhow::Result<serde_yaml::Value> {
        if self.file.as_os_str() == "-" {
            tracing::debug!("reading document from stdin");
            return Ok(load_document_from_reader(io::stdin().lock())?);
        }
        if !self.file.is_file() {
            return Err(gzh_errors::Error::file_not_found(&self.file).into());
        }
        tracing::debug!(path = %self.file.display(), "reading document");
        Ok(load_document(&self.file)?)
    }
}
