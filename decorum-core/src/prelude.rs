//! Intentional crate surface consumed by request handlers.

pub use crate::config::DecorationConfig;
pub use crate::decoration::{
    CapabilityRegistry, ChainedOrdering, Decoration, DecorationDispatcher, DecorationEngine,
    DecorationRequest, DecorationStep, OrderingStrategy, Pagination, SortDirection,
};
pub use crate::error::{DecorationError, ErrorCategory};
pub use decorum_model::{
    AccessToken, Application, Collection, LogEntry, LogLevel, RecordKind, Setting, SettingValue,
};
