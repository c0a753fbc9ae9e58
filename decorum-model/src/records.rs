//! Public-facing record types.
//!
//! These are the shapes handlers serialize into outbound responses after
//! conversion from backend wire types. Field names double as the logical
//! names callers use in sort options.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::ModelError;

/// Descriptor of a deployed application.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Application {
    pub id: Uuid,
    pub name: String,
    pub organization_id: Uuid,
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub replicas: i64,
}

/// Severity attached to a [`LogEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Numeric severity, higher is more severe.
    pub fn severity(&self) -> i64 {
        match self {
            LogLevel::Trace => 0,
            LogLevel::Debug => 1,
            LogLevel::Info => 2,
            LogLevel::Warn => 3,
            LogLevel::Error => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ModelError::UnknownLogLevel(value.to_string())),
        }
    }
}

/// A single log line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    pub level: LogLevel,
    pub message: String,
    pub source: String,
    /// Position of the line within its source stream
    pub sequence: i64,
}

/// Value held by a [`Setting`].
///
/// Settings are loosely typed upstream, so one collection can carry a mix of
/// integers, strings and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SettingValue {
    Integer(i64),
    Text(String),
    Flag(bool),
}

/// A configuration setting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Setting {
    pub key: String,
    pub value: SettingValue,
    pub scope: String,
    pub updated_at: DateTime<Utc>,
}

/// An API access token. Token listings never support ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessToken {
    pub id: Uuid,
    pub name: String,
    pub issued_at: DateTime<Utc>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub expires_at: Option<DateTime<Utc>>,
}
