use decorum_model::RecordKind;
use std::path::PathBuf;
use thiserror::Error;

/// Failures produced while decorating a collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecorationError {
    #[error("unable to apply decoration to this type: {kind}")]
    UnsupportedKind { kind: RecordKind },

    #[error("field '{field}' is not allowed for ordering {kind} records")]
    FieldNotAllowed { kind: RecordKind, field: String },

    #[error("field '{field}' could not be resolved on {kind} records")]
    FieldNotFound { kind: RecordKind, field: String },

    #[error("invalid pagination: {reason}")]
    InvalidPagination { reason: String },

    #[error(
        "{pairs} value pairs of field '{field}' on {kind} records could not be compared"
    )]
    Uncomparable {
        kind: RecordKind,
        field: String,
        pairs: usize,
    },
}

/// Coarse classification handlers map onto API status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The caller asked for something this kind cannot do.
    InvalidArgument,
    /// The capability table and the record shape disagree.
    NotFound,
}

impl DecorationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DecorationError::FieldNotFound { .. } => ErrorCategory::NotFound,
            DecorationError::UnsupportedKind { .. }
            | DecorationError::FieldNotAllowed { .. }
            | DecorationError::InvalidPagination { .. }
            | DecorationError::Uncomparable { .. } => ErrorCategory::InvalidArgument,
        }
    }

    /// Whether the failure is the caller's to fix.
    pub fn is_caller_error(&self) -> bool {
        self.category() == ErrorCategory::InvalidArgument
    }
}

pub type Result<T> = std::result::Result<T, DecorationError>;

/// Failures loading [`DecorationConfig`](crate::config::DecorationConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("capabilities table names an unknown record kind '{kind}'")]
    UnknownKind { kind: String },
    #[error("max_page_size must be at least 1")]
    InvalidPageSize,
}
