use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which directory argument failed its precondition check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DirRole {
    Input,
    Output,
}

impl fmt::Display for DirRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirRole::Input => write!(f, "input"),
            DirRole::Output => write!(f, "output"),
        }
    }
}

#[derive(Error, Debug)]
pub enum VendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("compression method {0:?} is not supported, use gz or zst")]
    UnsupportedCompression(String),

    #[error("{role} directory {} is invalid: {reason}", .path.display())]
    InvalidDir {
        role: DirRole,
        path: PathBuf,
        reason: String,
    },

    #[error("{context}: {source}")]
    Archive {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("dependency install failed: {0}")]
    Install(String),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, VendError>;
