use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Closed set of record shapes returned by backend services.
///
/// A record's kind is fixed when it is created. Wire names are the
/// `snake_case` strings returned by [`RecordKind::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RecordKind {
    /// Application descriptor
    Application,
    /// Log entry emitted by a deployed application
    LogEntry,
    /// Configuration setting
    Setting,
    /// API access token
    AccessToken,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Application,
        RecordKind::LogEntry,
        RecordKind::Setting,
        RecordKind::AccessToken,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Application => "application",
            RecordKind::LogEntry => "log_entry",
            RecordKind::Setting => "setting",
            RecordKind::AccessToken => "access_token",
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        RecordKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| ModelError::UnknownRecordKind(value.to_string()))
    }
}
