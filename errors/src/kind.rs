use std::fmt;
use std::io;

/// Well-known failure classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    ConfigNotFound,
    InvalidConfig,
    Unauthorized,
    Timeout,
    Permission,
    AlreadyExists,
    NotSupported,
}

impl ErrorKind {
    /// Returns the canonical message for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not found",
            ErrorKind::InvalidInput => "invalid input",
            ErrorKind::ConfigNotFound => "config not found",
            ErrorKind::InvalidConfig => "invalid config",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Timeout => "operation timed out",
            ErrorKind::Permission => "permission denied",
            ErrorKind::AlreadyExists => "already exists",
            ErrorKind::NotSupported => "not supported",
        }
    }

    /// Maps an I/O error kind onto a failure class, if one applies.
    pub fn from_io(kind: io::ErrorKind) -> Option<Self> {
        match kind {
            io::ErrorKind::NotFound => Some(ErrorKind::NotFound),
            io::ErrorKind::PermissionDenied => Some(ErrorKind::Permission),
            io::ErrorKind::AlreadyExists => Some(ErrorKind::AlreadyExists),
            io::ErrorKind::TimedOut => Some(ErrorKind::Timeout),
            io::ErrorKind::InvalidInput | io::ErrorKind::InvalidData => {
                Some(ErrorKind::InvalidInput)
            }
            io::ErrorKind::Unsupported => Some(ErrorKind::NotSupported),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
