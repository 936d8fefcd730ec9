//! Loading of YAML or JSON documents from files and streams.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Error type for document loading.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read document: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse YAML: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
    #[error("failed to parse JSON: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("failed to parse document (tried JSON and YAML)")]
    ParseFailed,
}

/// Loads a document from a YAML or JSON file.
pub fn load_document<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, DocumentError> {
    let data = fs::read(path.as_ref())?;
    parse_document(&data, path)
}

/// Parses a document, choosing the format from the file extension.
///
/// `.yaml`/`.yml` and `.json` are parsed strictly; anything else is tried
/// as JSON first, then as YAML.
pub fn parse_document<T: DeserializeOwned>(
    data: &[u8],
    path: impl AsRef<Path>,
) -> Result<T, DocumentError> {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_slice(data)?),
        Some("json") => Ok(serde_json::from_slice(data)?),
        _ => sniff(data),
    }
}

/// Reads a document of unknown format from a stream, e.g. stdin.
pub fn load_document_from_reader<T: DeserializeOwned>(
    mut reader: impl Read,
) -> Result<T, DocumentError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    sniff(&data)
}

fn sniff<T: DeserializeOwned>(data: &[u8]) -> Result<T, DocumentError> {
    if let Ok(v) = serde_json::from_slice(data) {
        return Ok(v);
    }
    if let Ok(v) = serde_yaml::from_slice(data) {
        return Ok(v);
    }
    Err(DocumentError::ParseFailed)
}
