use crate::kind::RecordKind;
use crate::records::{AccessToken, Application, LogEntry, Setting};

/// An ordered, homogeneous list of records.
///
/// One variant per [`RecordKind`]; the tag is the kind's wire name so a
/// collection serializes as `{"kind": "log_entry", "records": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "records"))]
pub enum Collection {
    #[cfg_attr(feature = "serde", serde(rename = "application"))]
    Applications(Vec<Application>),
    #[cfg_attr(feature = "serde", serde(rename = "log_entry"))]
    LogEntries(Vec<LogEntry>),
    #[cfg_attr(feature = "serde", serde(rename = "setting"))]
    Settings(Vec<Setting>),
    #[cfg_attr(feature = "serde", serde(rename = "access_token"))]
    AccessTokens(Vec<AccessToken>),
}

impl Collection {
    pub fn kind(&self) -> RecordKind {
        match self {
            Collection::Applications(_) => RecordKind::Application,
            Collection::LogEntries(_) => RecordKind::LogEntry,
            Collection::Settings(_) => RecordKind::Setting,
            Collection::AccessTokens(_) => RecordKind::AccessToken,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Collection::Applications(records) => records.len(),
            Collection::LogEntries(records) => records.len(),
            Collection::Settings(records) => records.len(),
            Collection::AccessTokens(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// An empty collection of the given kind.
    pub fn empty(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Application => Collection::Applications(Vec::new()),
            RecordKind::LogEntry => Collection::LogEntries(Vec::new()),
            RecordKind::Setting => Collection::Settings(Vec::new()),
            RecordKind::AccessToken => Collection::AccessTokens(Vec::new()),
        }
    }
}

impl From<Vec<Application>> for Collection {
    fn from(records: Vec<Application>) -> Self {
        Collection::Applications(records)
    }
}

impl From<Vec<LogEntry>> for Collection {
    fn from(records: Vec<LogEntry>) -> Self {
        Collection::LogEntries(records)
    }
}

impl From<Vec<Setting>> for Collection {
    fn from(records: Vec<Setting>) -> Self {
        Collection::Settings(records)
    }
}

impl From<Vec<AccessToken>> for Collection {
    fn from(records: Vec<AccessToken>) -> Self {
        Collection::AccessTokens(records)
    }
}
