//! Field resolution
//!
//! Maps a logical field name onto the extractor that reads it from a record.
//! Tables are declared statically per record type (see `impls`), so a name
//! always resolves to the same handle for the life of the process.

use super::traits::Record;
use super::values::FieldValue;
use crate::error::{DecorationError, Result};
use std::fmt;
use tracing::trace;

/// Reads one field of `R` as a comparable value.
pub type Extractor<R> = for<'a> fn(&'a R) -> FieldValue<'a>;

/// One entry of a record type's field table.
pub struct FieldSpec<R: 'static> {
    /// Logical (wire) name
    pub name: &'static str,
    pub extract: Extractor<R>,
}

impl<R: 'static> fmt::Debug for FieldSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("record", &std::any::type_name::<R>())
            .finish()
    }
}

/// A resolved field, ready to extract sort keys.
pub struct FieldHandle<R: 'static> {
    spec: &'static FieldSpec<R>,
}

impl<R: 'static> Clone for FieldHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: 'static> Copy for FieldHandle<R> {}

impl<R: 'static> fmt::Debug for FieldHandle<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldHandle").field(&self.spec.name).finish()
    }
}

impl<R: 'static> PartialEq for FieldHandle<R> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.spec, other.spec)
    }
}

impl<R: 'static> Eq for FieldHandle<R> {}

impl<R: 'static> FieldHandle<R> {
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    #[inline]
    pub fn extract<'a>(&self, record: &'a R) -> FieldValue<'a> {
        (self.spec.extract)(record)
    }
}

/// Resolve `field` against the shape of `R`.
///
/// `sample` is any record of the collection; it is only read to log the
/// value class the field produces. A miss means the capability table names
/// a field the record shape does not have.
pub fn resolve_field<R: Record>(field: &str, sample: &R) -> Result<FieldHandle<R>> {
    let spec = R::field_table()
        .iter()
        .find(|spec| spec.name == field)
        .ok_or_else(|| DecorationError::FieldNotFound {
            kind: R::KIND,
            field: field.to_string(),
        })?;

    trace!(
        kind = %R::KIND,
        field,
        class = (spec.extract)(sample).class(),
        "resolved sort field"
    );

    Ok(FieldHandle { spec })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use decorum_model::{Application, RecordKind};
    use uuid::Uuid;

    fn sample() -> Application {
        Application {
            id: Uuid::nil(),
            name: "billing".into(),
            organization_id: Uuid::nil(),
            version: "1.4.0".into(),
            created_at: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
            replicas: 3,
        }
    }

    #[test]
    fn resolves_known_fields() {
        let app = sample();
        let handle = resolve_field::<Application>("name", &app).unwrap();
        assert_eq!(handle.name(), "name");
        assert_eq!(handle.extract(&app), FieldValue::text("billing"));

        let created = resolve_field::<Application>("created_at", &app).unwrap();
        assert_eq!(created.extract(&app), FieldValue::Integer(1_700_000_000_000));
    }

    #[test]
    fn resolution_is_deterministic() {
        let app = sample();
        let first = resolve_field::<Application>("replicas", &app).unwrap();
        let second = resolve_field::<Application>("replicas", &app).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_fields_are_not_found() {
        let err = resolve_field::<Application>("owner", &sample()).unwrap_err();
        assert_eq!(
            err,
            DecorationError::FieldNotFound {
                kind: RecordKind::Application,
                field: "owner".into(),
            }
        );
    }
}
