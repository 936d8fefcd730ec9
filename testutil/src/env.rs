use std::env;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tempfile::TempDir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that touch process-wide state (environment, cwd).
///
/// A test that panicked while holding the lock does not poison it for the
/// rest of the suite.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Sets or removes an environment variable and restores the previous value
/// on drop.
#[derive(Debug)]
pub struct EnvGuard {
    key: String,
    previous: Option<OsString>,
}

impl EnvGuard {
    pub fn set(key: impl Into<String>, value: impl AsRef<str>) -> Self {
        let key = key.into();
        let previous = env::var_os(&key);
        // SAFETY: callers hold `env_lock()` so no other test thread touches
        // the environment concurrently.
        unsafe { env::set_var(&key, value.as_ref()) };
        Self { key, previous }
    }

    pub fn unset(key: impl Into<String>) -> Self {
        let key = key.into();
        let previous = env::var_os(&key);
        // SAFETY: see `EnvGuard::set`.
        unsafe { env::remove_var(&key) };
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: see `EnvGuard::set`.
        unsafe {
            match &self.previous {
                Some(value) => env::set_var(&self.key, value),
                None => env::remove_var(&self.key),
            }
        }
    }
}

/// Changes the working directory and restores the previous one on drop.
#[derive(Debug)]
pub struct CwdGuard {
    previous: PathBuf,
    temp: Option<TempDir>,
}

impl CwdGuard {
    pub fn change(dir: impl AsRef<Path>) -> io::Result<Self> {
        let previous = env::current_dir()?;
        env::set_current_dir(dir)?;
        Ok(Self {
            previous,
            temp: None,
        })
    }

    /// Changes into a fresh temporary directory, removed on drop.
    pub fn temp() -> io::Result<Self> {
        let temp = tempfile::tempdir()?;
        let mut guard = Self::change(temp.path())?;
        guard.temp = Some(temp);
        Ok(guard)
    }

    /// Path of the temporary directory created by [`CwdGuard::temp`].
    pub fn temp_path(&self) -> Option<&Path> {
        self.temp.as_ref().map(TempDir::path)
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}
