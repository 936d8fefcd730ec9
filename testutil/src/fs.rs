use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates a file named `name` with `content` in a fresh temporary directory.
///
/// The directory is removed when the returned [`TempDir`] is dropped, so
/// keep it alive for as long as the path is used.
pub fn temp_file(name: &str, content: &str) -> io::Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = temp_file_in(dir.path(), name, content)?;
    Ok((dir, path))
}

/// Creates a file under `dir`, creating missing parent directories.
pub fn temp_file_in(dir: impl AsRef<Path>, name: &str, content: &str) -> io::Result<PathBuf> {
    let path = dir.as_ref().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}
