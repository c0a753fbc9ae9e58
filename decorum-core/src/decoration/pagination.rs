use super::engine::DecorationEngine;
use super::traits::{Decoration, Record};
use crate::error::{DecorationError, Result};
use decorum_model::RecordKind;
use serde::{Deserialize, Serialize};

/// Offset/limit window over a collection.
///
/// Legal for every registered kind, independent of its ordering allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub offset: usize,
    pub limit: usize,
}

impl Pagination {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }
}

impl Decoration for Pagination {
    fn name(&self) -> &'static str {
        "pagination"
    }

    fn validate(&self, kind: RecordKind, engine: &DecorationEngine) -> Result<()> {
        if !engine.registry().supports(kind) {
            return Err(DecorationError::UnsupportedKind { kind });
        }

        let max = engine.config().max_page_size;
        if self.limit == 0 {
            return Err(DecorationError::InvalidPagination {
                reason: "limit must be at least 1".to_string(),
            });
        }
        if self.limit > max {
            return Err(DecorationError::InvalidPagination {
                reason: format!("limit {} exceeds maximum page size {}", self.limit, max),
            });
        }
        Ok(())
    }

    fn apply<R: Record>(&self, _engine: &DecorationEngine, records: Vec<R>) -> Result<Vec<R>> {
        Ok(records
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecorationConfig;
    use crate::decoration::CapabilityRegistry;
    use decorum_model::{LogEntry, LogLevel};
    use std::sync::Arc;

    fn entries(count: i64) -> Vec<LogEntry> {
        (0..count)
            .map(|sequence| LogEntry {
                timestamp: 1_000 + sequence,
                level: LogLevel::Info,
                message: format!("line {sequence}"),
                source: "worker".into(),
                sequence,
            })
            .collect()
    }

    fn engine(max_page_size: usize) -> DecorationEngine {
        DecorationEngine::new(
            Arc::new(CapabilityRegistry::builtin()),
            DecorationConfig {
                max_page_size,
                ..DecorationConfig::default()
            },
        )
    }

    #[test]
    fn takes_a_window() {
        let engine = engine(10);
        let page = Pagination::new(2, 3);
        page.validate(RecordKind::LogEntry, &engine).unwrap();

        let window = page.apply(&engine, entries(10)).unwrap();
        let sequences: Vec<i64> = window.iter().map(|e| e.sequence).collect();
        assert_eq!(sequences, vec![2, 3, 4]);
    }

    #[test]
    fn offset_past_the_end_is_empty() {
        let engine = engine(10);
        let window = Pagination::new(20, 5).apply(&engine, entries(4)).unwrap();
        assert!(window.is_empty());
    }

    #[test]
    fn rejects_zero_and_oversized_limits() {
        let engine = engine(10);
        assert!(matches!(
            Pagination::new(0, 0).validate(RecordKind::LogEntry, &engine),
            Err(DecorationError::InvalidPagination { .. })
        ));
        assert!(matches!(
            Pagination::new(0, 11).validate(RecordKind::LogEntry, &engine),
            Err(DecorationError::InvalidPagination { .. })
        ));
    }

    #[test]
    fn applies_to_kinds_without_orderable_fields() {
        let engine = engine(10);
        assert!(Pagination::new(0, 5)
            .validate(RecordKind::AccessToken, &engine)
            .is_ok());
    }
}
