//! Decoration engine
//!
//! Validates ordering requests against the capability registry and performs
//! the generic stable sort over any [`Record`] type.

use super::fields::resolve_field;
use super::registry::CapabilityRegistry;
use super::strategy::OrderingStrategy;
use super::traits::{Decoration, Record};
use super::utils::{reorder_by_indices, stable_sort_indices};
use super::values::{FieldValue, compare_values};
use crate::config::DecorationConfig;
use crate::error::{ConfigError, DecorationError, Result};
use decorum_model::RecordKind;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, warn};

/// Counters collected while ordering one collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecorationReport {
    /// Comparator invocations
    pub comparisons: usize,
    /// Comparisons whose values had no common comparable class
    pub uncomparable: usize,
}

/// Generic ordering engine.
///
/// Holds the registry and configuration built at startup. Cloning is cheap
/// and every clone shares the same read-only tables.
#[derive(Debug, Clone)]
pub struct DecorationEngine {
    registry: Arc<CapabilityRegistry>,
    config: Arc<DecorationConfig>,
}

impl Default for DecorationEngine {
    fn default() -> Self {
        Self::new(
            Arc::new(CapabilityRegistry::builtin()),
            DecorationConfig::default(),
        )
    }
}

impl DecorationEngine {
    pub fn new(registry: Arc<CapabilityRegistry>, config: DecorationConfig) -> Self {
        Self {
            registry,
            config: Arc::new(config),
        }
    }

    /// Build the registry from `config` and wrap both in an engine.
    ///
    /// Allow-listed fields missing from the record shapes are logged here so
    /// drift shows up at startup rather than on the first request.
    pub fn from_config(config: DecorationConfig) -> std::result::Result<Self, ConfigError> {
        let registry = CapabilityRegistry::from_config(&config)?;
        for (kind, field) in registry.unresolvable_fields() {
            warn!(%kind, field = %field, "allow-listed field does not exist on record shape");
        }
        Ok(Self::new(Arc::new(registry), config))
    }

    pub fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }

    pub fn config(&self) -> &DecorationConfig {
        &self.config
    }

    /// Check an ordering request against the registry without touching data.
    pub fn validate(&self, kind: RecordKind, strategy: &OrderingStrategy) -> Result<()> {
        if !self.registry.supports(kind) {
            debug!(%kind, "no capability entry for kind");
            return Err(DecorationError::UnsupportedKind { kind });
        }

        if !self.registry.is_orderable(kind, strategy.field()) {
            debug!(%kind, field = strategy.field(), "field not orderable");
            return Err(DecorationError::FieldNotAllowed {
                kind,
                field: strategy.field().to_string(),
            });
        }

        Ok(())
    }

    /// Order `records` by `strategy`.
    ///
    /// Does not validate; callers go through [`DecorationEngine::decorate`]
    /// or the dispatcher for that.
    pub fn apply<R: Record>(&self, records: Vec<R>, strategy: &OrderingStrategy) -> Result<Vec<R>> {
        self.apply_with_report(records, strategy)
            .map(|(records, _)| records)
    }

    /// Like [`DecorationEngine::apply`], also returning comparison counters.
    pub fn apply_with_report<R: Record>(
        &self,
        records: Vec<R>,
        strategy: &OrderingStrategy,
    ) -> Result<(Vec<R>, DecorationReport)> {
        let Some(sample) = records.first() else {
            return Ok((records, DecorationReport::default()));
        };

        let handle = resolve_field(strategy.field(), sample)?;
        let keys: Vec<FieldValue<'_>> = records.iter().map(|record| handle.extract(record)).collect();
        let direction = strategy.direction();

        let mut report = DecorationReport::default();
        let order = stable_sort_indices(keys.len(), |a, b| {
            report.comparisons += 1;
            match compare_values(&keys[a], &keys[b]) {
                Some(ordering) => direction.apply(ordering),
                None => {
                    report.uncomparable += 1;
                    Ordering::Equal
                }
            }
        });
        drop(keys);

        if report.uncomparable > 0 {
            // TODO: revisit whether mixed-class values should fail by default
            // once handlers surface partial-order warnings to callers.
            warn!(
                kind = %R::KIND,
                field = strategy.field(),
                pairs = report.uncomparable,
                strict = self.config.strict_comparisons,
                "sort field produced values that cannot be compared; treating them as equal"
            );
            if self.config.strict_comparisons {
                return Err(DecorationError::Uncomparable {
                    kind: R::KIND,
                    field: strategy.field().to_string(),
                    pairs: report.uncomparable,
                });
            }
        }

        Ok((reorder_by_indices(records, &order), report))
    }

    /// Validate then apply any decoration to a typed collection.
    pub fn decorate<R: Record, D: Decoration>(&self, records: Vec<R>, decoration: &D) -> Result<Vec<R>> {
        decoration.validate(R::KIND, self)?;
        decoration.apply(self, records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use decorum_model::{Setting, SettingValue};

    fn setting(key: &str, value: SettingValue) -> Setting {
        Setting {
            key: key.into(),
            value,
            scope: "global".into(),
            updated_at: Utc.timestamp_millis_opt(0).unwrap(),
        }
    }

    fn keys(settings: &[Setting]) -> Vec<&str> {
        settings.iter().map(|s| s.key.as_str()).collect()
    }

    #[test]
    fn validate_distinguishes_unsupported_kinds_from_disallowed_fields() {
        let engine = DecorationEngine::new(
            Arc::new(CapabilityRegistry::default().with_kind(RecordKind::Setting, ["key"])),
            DecorationConfig::default(),
        );

        assert!(engine
            .validate(RecordKind::Setting, &OrderingStrategy::ascending("key"))
            .is_ok());
        assert_eq!(
            engine.validate(RecordKind::Setting, &OrderingStrategy::ascending("scope")),
            Err(DecorationError::FieldNotAllowed {
                kind: RecordKind::Setting,
                field: "scope".into(),
            })
        );
        assert_eq!(
            engine.validate(RecordKind::LogEntry, &OrderingStrategy::ascending("timestamp")),
            Err(DecorationError::UnsupportedKind {
                kind: RecordKind::LogEntry,
            })
        );
    }

    #[test]
    fn mixed_value_classes_degrade_to_ties() {
        let engine = DecorationEngine::default();
        let settings = vec![
            setting("c", SettingValue::Integer(3)),
            setting("flag", SettingValue::Flag(true)),
            setting("a", SettingValue::Integer(1)),
            setting("text", SettingValue::Text("x".into())),
        ];

        let (sorted, report) = engine
            .apply_with_report(settings, &OrderingStrategy::ascending("value"))
            .unwrap();

        assert_eq!(sorted.len(), 4);
        assert!(report.uncomparable > 0);
        assert!(report.comparisons >= report.uncomparable);
    }

    #[test]
    fn uniformly_typed_values_sort_without_degrading() {
        let engine = DecorationEngine::default();
        let settings = vec![
            setting("c", SettingValue::Integer(3)),
            setting("a", SettingValue::Integer(1)),
            setting("b", SettingValue::Integer(2)),
        ];

        let (sorted, report) = engine
            .apply_with_report(settings, &OrderingStrategy::descending("value"))
            .unwrap();

        assert_eq!(keys(&sorted), vec!["c", "b", "a"]);
        assert_eq!(report.uncomparable, 0);
    }

    #[test]
    fn strict_mode_rejects_uncomparable_values() {
        let engine = DecorationEngine::new(
            Arc::new(CapabilityRegistry::builtin()),
            DecorationConfig {
                strict_comparisons: true,
                ..DecorationConfig::default()
            },
        );
        let settings = vec![
            setting("flag", SettingValue::Flag(false)),
            setting("a", SettingValue::Integer(1)),
        ];

        let err = engine
            .apply(settings, &OrderingStrategy::ascending("value"))
            .unwrap_err();
        assert!(matches!(err, DecorationError::Uncomparable { pairs, .. } if pairs > 0));
    }

    #[test]
    fn from_config_uses_configured_allow_lists() {
        let config = DecorationConfig::from_toml_str(
            r#"
            [capabilities]
            setting = ["key"]
            "#,
        )
        .unwrap();
        let engine = DecorationEngine::from_config(config).unwrap();

        assert!(engine.registry().is_orderable(RecordKind::Setting, "key"));
        assert!(!engine.registry().is_orderable(RecordKind::Setting, "value"));
    }
}
