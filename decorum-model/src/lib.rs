//! Core data model definitions shared across Decorum crates.
#![allow(missing_docs)]

pub mod collection;
pub mod error;
pub mod kind;
pub mod records;

pub use collection::Collection;
pub use error::ModelError;
pub use kind::RecordKind;
pub use records::{AccessToken, Application, LogEntry, LogLevel, Setting, SettingValue};
