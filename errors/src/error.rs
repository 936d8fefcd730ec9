use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::kind::ErrorKind;

/// Result type alias for gzh operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for gzh tools.
#[derive(Error, Debug)]
pub enum Error {
    /// A bare failure class.
    #[error("{0}")]
    Kind(ErrorKind),

    /// An error tagged with a failure class.
    #[error("{kind}: {source}")]
    Classified { kind: ErrorKind, source: Box<Error> },

    /// An error with a context message.
    #[error("{message}: {source}")]
    Context { message: String, source: Box<Error> },

    /// An error raised by a named operation.
    #[error("{operation} failed: {source}")]
    Op { operation: String, source: Box<Error> },

    /// A plain message.
    #[error("{0}")]
    Message(String),

    #[error("invalid {path_type} path{}", cause_suffix(.source))]
    InvalidPath {
        path_type: String,
        source: Option<Box<Error>>,
    },

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("directory does not exist: {}", .0.display())]
    DirNotFound(PathBuf),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("--{flag} flag is required{}", examples_suffix(.examples))]
    RequiredFlag { flag: String, examples: Vec<String> },

    #[error("--{0} and --{1} cannot be used together")]
    MutuallyExclusive(String, String),

    #[error("{name} must be at least {min}")]
    MinValue { name: String, min: i64 },

    #[error("{name} must be at most {max}")]
    MaxValue { name: String, max: i64 },

    #[error("{name} must be between {min} and {max}")]
    Range { name: String, min: i64, max: i64 },

    #[error("{0} cannot be empty")]
    EmptyValue(String),

    #[error("{}", invalid_value(.name, .value, .reason))]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },

    /// IO error.
    #[error("{0}")]
    Io(#[from] io::Error),

    /// Several independent errors; messages are joined with newlines.
    #[error("{}", join_messages(.0))]
    Multiple(Vec<Error>),
}

fn cause_suffix(source: &Option<Box<Error>>) -> String {
    source
        .as_ref()
        .map(|cause| format!(": {cause}"))
        .unwrap_or_default()
}

fn examples_suffix(examples: &[String]) -> String {
    if examples.is_empty() {
        return String::new();
    }
    let mut out = String::from("\n\nExamples:");
    for example in examples {
        out.push_str("\n  ");
        out.push_str(example);
    }
    out
}

fn invalid_value(name: &str, value: &str, reason: &str) -> String {
    if reason.is_empty() {
        format!("invalid {name}: {value}")
    } else {
        format!("invalid {name} {value:?}: {reason}")
    }
}

fn join_messages(errors: &[Error]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::Kind(kind)
    }
}

impl Error {
    /// Creates an error from a plain message.
    pub fn new(message: impl Into<String>) -> Self {
        Error::Message(message.into())
    }

    /// Tags this error with a failure class.
    pub fn classify(self, kind: ErrorKind) -> Self {
        Error::Classified {
            kind,
            source: Box::new(self),
        }
    }

    /// Prefixes this error with a context message.
    pub fn context(self, message: impl Into<String>) -> Self {
        Error::Context {
            message: message.into(),
            source: Box::new(self),
        }
    }

    /// Marks this error as the failure of `operation`.
    pub fn op(self, operation: impl Into<String>) -> Self {
        Error::Op {
            operation: operation.into(),
            source: Box::new(self),
        }
    }

    pub fn invalid_path(path_type: impl Into<String>) -> Self {
        Error::InvalidPath {
            path_type: path_type.into(),
            source: None,
        }
    }

    pub fn invalid_path_with(path_type: impl Into<String>, cause: impl Into<Error>) -> Self {
        Error::InvalidPath {
            path_type: path_type.into(),
            source: Some(Box::new(cause.into())),
        }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Error::FileNotFound(path.into())
    }

    pub fn dir_not_found(path: impl Into<PathBuf>) -> Self {
        Error::DirNotFound(path.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// Creates a required flag error listing usage examples.
    pub fn required_flag<I, S>(flag: impl Into<String>, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Error::RequiredFlag {
            flag: flag.into(),
            examples: examples.into_iter().map(Into::into).collect(),
        }
    }

    pub fn mutually_exclusive(a: impl Into<String>, b: impl Into<String>) -> Self {
        Error::MutuallyExclusive(a.into(), b.into())
    }

    pub fn min_value(name: impl Into<String>, min: i64) -> Self {
        Error::MinValue {
            name: name.into(),
            min,
        }
    }

    pub fn max_value(name: impl Into<String>, max: i64) -> Self {
        Error::MaxValue {
            name: name.into(),
            max,
        }
    }

    pub fn range(name: impl Into<String>, min: i64, max: i64) -> Self {
        Error::Range {
            name: name.into(),
            min,
            max,
        }
    }

    pub fn empty_value(name: impl Into<String>) -> Self {
        Error::EmptyValue(name.into())
    }

    /// Creates an invalid value error. An empty reason omits the quoting.
    pub fn invalid_value(
        name: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidValue {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns the failure class of this layer, looking through context
    /// and operation wrappers.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Kind(kind) | Error::Classified { kind, .. } => Some(*kind),
            Error::Context { source, .. } | Error::Op { source, .. } => source.kind(),
            Error::FileNotFound(_) | Error::DirNotFound(_) => Some(ErrorKind::NotFound),
            Error::InvalidPath { .. }
            | Error::Validation(_)
            | Error::RequiredFlag { .. }
            | Error::MutuallyExclusive(..)
            | Error::MinValue { .. }
            | Error::MaxValue { .. }
            | Error::Range { .. }
            | Error::EmptyValue(_)
            | Error::InvalidValue { .. } => Some(ErrorKind::InvalidInput),
            Error::Io(err) => ErrorKind::from_io(err.kind()),
            Error::Message(_) | Error::Multiple(_) => None,
        }
    }

    /// Reports whether any error in the chain is of the given class.
    pub fn is(&self, kind: ErrorKind) -> bool {
        if self.kind() == Some(kind) {
            return true;
        }
        match self {
            Error::Classified { source, .. }
            | Error::Context { source, .. }
            | Error::Op { source, .. } => source.is(kind),
            Error::InvalidPath {
                source: Some(source),
                ..
            } => source.is(kind),
            Error::Multiple(errors) => errors.iter().any(|e| e.is(kind)),
            _ => false,
        }
    }

    /// Returns true if the error chain contains [`ErrorKind::NotFound`].
    pub fn is_not_found(&self) -> bool {
        self.is(ErrorKind::NotFound)
    }

    /// Returns true if the error chain contains [`ErrorKind::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        self.is(ErrorKind::InvalidInput)
    }
}

/// Combines errors. Returns `None` when there are none and the error itself
/// when there is exactly one.
pub fn join<I>(errors: I) -> Option<Error>
where
    I: IntoIterator<Item = Error>,
{
    let mut errors: Vec<Error> = errors.into_iter().collect();
    match errors.len() {
        0 => None,
        1 => errors.pop(),
        _ => Some(Error::Multiple(errors)),
    }
}

/// Wrapping helpers for results. All of them leave `Ok` untouched.
pub trait ResultExt<T> {
    fn context(self, message: impl Into<String>) -> Result<T>;

    fn op(self, operation: impl Into<String>) -> Result<T>;

    fn classify(self, kind: ErrorKind) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().context(message))
    }

    fn op(self, operation: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().op(operation))
    }

    fn classify(self, kind: ErrorKind) -> Result<T> {
        self.map_err(|e| e.into().classify(kind))
    }
}
