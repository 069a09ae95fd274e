//! Load-time error types.
//!
//! Level descriptions and tuning files are the only inputs that can be
//! malformed. Everything past loading is a total function over valid data,
//! so this is the crate's only error type.

use std::fmt;
use std::path::PathBuf;

/// Failure to read or validate a level description or tuning file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The contents are not valid JSON or do not match the expected shape
    /// (missing field, unknown asteroid size token, wrong array length).
    Parse(serde_json::Error),

    /// The contents parsed but a value is outside its valid range.
    Invalid {
        /// Which value was rejected, e.g. `asteroids[2].position`.
        what: String,
        /// Human-readable constraint that was violated.
        reason: &'static str,
    },
}

impl LoadError {
    pub(crate) fn invalid(what: impl Into<String>, reason: &'static str) -> Self {
        LoadError::Invalid {
            what: what.into(),
            reason,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "failed to read '{}': {}", path.display(), source)
            }
            LoadError::Parse(err) => write!(f, "malformed description: {}", err),
            LoadError::Invalid { what, reason } => write!(f, "invalid {}: {}", what, reason),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse(err) => Some(err),
            LoadError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}
