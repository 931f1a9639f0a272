use std::fmt;

/// Errors raised while constructing a lab or adapting external input.
///
/// Evaluation itself never fails: a malformed query is reported as
/// [`Verdict::Malformed`](crate::Verdict::Malformed), not as an `Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The kind of failure
    pub kind: ErrorKind,
    /// Human-readable message explaining the failure
    pub message: String,
}

impl Error {
    /// Creates a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {}

/// The kind of [`Error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Two records in a store share an identifier
    DuplicateRecord {
        /// The repeated identifier
        identifier: String,
    },
    /// A tutorial was built from an empty step table
    EmptyTutorial,
    /// A key has no action bound to it
    UnknownKey {
        /// The key as received from the adapter
        key: String,
    },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::DuplicateRecord { identifier } => {
                write!(f, "Duplicate record '{}'", identifier)
            }
            ErrorKind::EmptyTutorial => write!(f, "Empty tutorial"),
            ErrorKind::UnknownKey { key } => write!(f, "Unknown key '{}'", key),
        }
    }
}
