use std::fmt::{self, Display};

/// Errors produced by model constructors and parsing routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownRecordKind(String),
    UnknownLogLevel(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownRecordKind(name) => {
                write!(f, "unknown record kind: {name}")
            }
            ModelError::UnknownLogLevel(name) => {
                write!(f, "unknown log level: {name}")
            }
        }
    }
}

impl std::error::Error for ModelError {}
