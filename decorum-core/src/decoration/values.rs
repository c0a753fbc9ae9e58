//! Comparable values extracted from records
//!
//! Ordering is defined for two value classes: signed integers and strings.
//! Any other pairing is uncomparable and the engine treats it as a tie.

use std::borrow::Cow;
use std::cmp::Ordering;

/// A field value read from a record for comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Integer(i64),
    Text(Cow<'a, str>),
    Boolean(bool),
    Missing,
}

impl<'a> FieldValue<'a> {
    pub fn text(value: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(value))
    }

    pub fn owned_text(value: String) -> Self {
        FieldValue::Text(Cow::Owned(value))
    }

    /// Name of the value class, used in logs.
    pub fn class(&self) -> &'static str {
        match self {
            FieldValue::Integer(_) => "integer",
            FieldValue::Text(_) => "text",
            FieldValue::Boolean(_) => "boolean",
            FieldValue::Missing => "missing",
        }
    }
}

impl From<Option<i64>> for FieldValue<'_> {
    fn from(value: Option<i64>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::Integer)
    }
}

/// Compare two extracted values.
///
/// Returns `None` when the pair does not share a comparable class.
pub fn compare_values(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Option<Ordering> {
    match (a, b) {
        (FieldValue::Integer(a), FieldValue::Integer(b)) => Some(a.cmp(b)),
        (FieldValue::Text(a), FieldValue::Text(b)) => Some(a.as_ref().cmp(b.as_ref())),
        _ => None,
    }
}
