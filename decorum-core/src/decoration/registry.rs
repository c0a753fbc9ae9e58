//! Capability registry
//!
//! The authoritative table of which logical fields may order which record
//! kind. Built once at startup and shared read-only afterwards.

use super::impls::field_names;
use crate::config::DecorationConfig;
use crate::error::ConfigError;
use decorum_model::RecordKind;
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

/// Default ordering allow-lists, by wire field name.
///
/// Adding a kind means adding a row here; the engine never needs to change.
const BUILTIN_CAPABILITIES: &[(RecordKind, &[&str])] = &[
    (
        RecordKind::Application,
        &["name", "version", "created_at", "replicas"],
    ),
    (
        RecordKind::LogEntry,
        &["timestamp", "level", "source", "sequence"],
    ),
    (RecordKind::Setting, &["key", "scope", "value", "updated_at"]),
    // Token listings are registered but never orderable.
    (RecordKind::AccessToken, &[]),
];

/// Kind to orderable-field table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilityRegistry {
    entries: BTreeMap<RecordKind, BTreeSet<String>>,
}

impl CapabilityRegistry {
    /// The builtin allow-lists.
    pub fn builtin() -> Self {
        BUILTIN_CAPABILITIES
            .iter()
            .fold(Self::default(), |registry, (kind, fields)| {
                registry.with_kind(*kind, fields.iter().copied())
            })
    }

    /// Build the registry described by `config`, falling back to
    /// [`CapabilityRegistry::builtin`] when it carries no capabilities table.
    pub fn from_config(config: &DecorationConfig) -> Result<Self, ConfigError> {
        let Some(capabilities) = &config.capabilities else {
            return Ok(Self::builtin());
        };

        capabilities
            .iter()
            .try_fold(Self::default(), |registry, (name, fields)| {
                let kind = RecordKind::from_str(name)
                    .map_err(|_| ConfigError::UnknownKind { kind: name.clone() })?;
                Ok(registry.with_kind(kind, fields.iter().map(String::as_str)))
            })
    }

    /// Register `kind` with the given orderable fields, replacing any
    /// previous entry.
    pub fn with_kind<I, S>(mut self, kind: RecordKind, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .insert(kind, fields.into_iter().map(Into::into).collect());
        self
    }

    /// Whether `kind` has an entry at all.
    pub fn supports(&self, kind: RecordKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Whether `field` may order records of `kind`. Never fails; unknown
    /// kinds and fields are simply not orderable.
    pub fn is_orderable(&self, kind: RecordKind, field: &str) -> bool {
        self.entries
            .get(&kind)
            .is_some_and(|fields| fields.contains(field))
    }

    /// Orderable fields of `kind`, if the kind is registered.
    pub fn orderable_fields(&self, kind: RecordKind) -> Option<&BTreeSet<String>> {
        self.entries.get(&kind)
    }

    /// Registered kinds in a stable order.
    pub fn kinds(&self) -> impl Iterator<Item = RecordKind> + '_ {
        self.entries.keys().copied()
    }

    /// Allow-listed fields that the record shape does not expose.
    ///
    /// A non-empty result means the table and the record types have drifted;
    /// requests on those fields will fail with `FieldNotFound`.
    pub fn unresolvable_fields(&self) -> Vec<(RecordKind, String)> {
        self.entries
            .iter()
            .flat_map(|(kind, fields)| {
                let known = field_names(*kind);
                fields
                    .iter()
                    .filter(move |field| !known.iter().any(|name| *name == field.as_str()))
                    .map(move |field| (*kind, field.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_covers_every_kind() {
        let registry = CapabilityRegistry::builtin();
        for kind in RecordKind::ALL {
            assert!(registry.supports(kind), "{kind} missing from builtin table");
        }
        assert!(registry.unresolvable_fields().is_empty());
    }

    #[test]
    fn lookups_never_fail() {
        let registry = CapabilityRegistry::builtin();
        assert!(registry.is_orderable(RecordKind::Application, "name"));
        assert!(!registry.is_orderable(RecordKind::Application, "organization_id"));
        assert!(!registry.is_orderable(RecordKind::AccessToken, "name"));

        let empty = CapabilityRegistry::default();
        assert!(!empty.supports(RecordKind::LogEntry));
        assert!(!empty.is_orderable(RecordKind::LogEntry, "timestamp"));
    }

    #[test]
    fn config_table_replaces_builtin() {
        let config = DecorationConfig::from_toml_str(
            r#"
            [capabilities]
            log_entry = ["timestamp"]
            "#,
        )
        .unwrap();
        let registry = CapabilityRegistry::from_config(&config).unwrap();

        assert_eq!(registry.kinds().collect::<Vec<_>>(), vec![RecordKind::LogEntry]);
        assert!(registry.is_orderable(RecordKind::LogEntry, "timestamp"));
        assert!(!registry.is_orderable(RecordKind::LogEntry, "level"));
        assert!(!registry.supports(RecordKind::Application));
    }

    #[test]
    fn config_rejects_unknown_kinds() {
        let config = DecorationConfig::from_toml_str(
            r#"
            [capabilities]
            deployment = ["name"]
            "#,
        )
        .unwrap();
        let err = CapabilityRegistry::from_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKind { kind } if kind == "deployment"));
    }

    #[test]
    fn reports_drifted_fields() {
        let registry = CapabilityRegistry::builtin()
            .with_kind(RecordKind::Application, ["name", "owner"]);
        assert_eq!(
            registry.unresolvable_fields(),
            vec![(RecordKind::Application, "owner".to_string())]
        );
    }
}
