//! Ordering strategies
//!
//! An [`OrderingStrategy`] is one sort key plus a direction. A
//! [`ChainedOrdering`] composes several of them into a multi-key sort.

use super::engine::DecorationEngine;
use super::traits::{Decoration, Record};
use crate::error::Result;
use decorum_model::RecordKind;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    /// Orient an ascending comparison result.
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// A request to order a collection by one logical field.
///
/// Immutable once built; the field is not tied to any kind until the engine
/// validates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderingStrategy {
    field: String,
    #[serde(default)]
    direction: SortDirection,
}

impl OrderingStrategy {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn is_ascending(&self) -> bool {
        self.direction == SortDirection::Ascending
    }
}

impl Decoration for OrderingStrategy {
    fn name(&self) -> &'static str {
        "ordering"
    }

    fn validate(&self, kind: RecordKind, engine: &DecorationEngine) -> Result<()> {
        engine.validate(kind, self)
    }

    fn apply<R: Record>(&self, engine: &DecorationEngine, records: Vec<R>) -> Result<Vec<R>> {
        engine.apply(records, self)
    }
}

/// Multi-key ordering; earlier keys take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainedOrdering {
    keys: Vec<OrderingStrategy>,
}

impl ChainedOrdering {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a lower-precedence key to the chain
    pub fn then_by(mut self, strategy: OrderingStrategy) -> Self {
        self.keys.push(strategy);
        self
    }

    pub fn keys(&self) -> &[OrderingStrategy] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl From<Vec<OrderingStrategy>> for ChainedOrdering {
    fn from(keys: Vec<OrderingStrategy>) -> Self {
        Self { keys }
    }
}

impl Decoration for ChainedOrdering {
    fn name(&self) -> &'static str {
        "chained_ordering"
    }

    fn validate(&self, kind: RecordKind, engine: &DecorationEngine) -> Result<()> {
        self.keys
            .iter()
            .try_for_each(|key| engine.validate(kind, key))
    }

    fn apply<R: Record>(&self, engine: &DecorationEngine, records: Vec<R>) -> Result<Vec<R>> {
        // Each pass is stable, so sorting by the least significant key first
        // leaves the primary key in charge.
        self.keys
            .iter()
            .rev()
            .try_fold(records, |records, key| engine.apply(records, key))
    }
}
