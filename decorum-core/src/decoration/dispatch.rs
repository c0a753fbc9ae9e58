//! Decoration dispatcher
//!
//! Bridges the strongly typed [`Collection`] held by a request handler and
//! the generic engine: the collection's tag selects the record type, the
//! engine runs over the concrete `Vec`, and the result goes back into the
//! same variant.

use super::engine::DecorationEngine;
use super::request::{DecorationRequest, DecorationStep};
use super::traits::Decoration;
use crate::error::{DecorationError, Result};
use decorum_model::{Collection, RecordKind};
use tracing::debug;

/// Routes collections to the engine.
#[derive(Debug, Clone, Default)]
pub struct DecorationDispatcher {
    engine: DecorationEngine,
}

impl DecorationDispatcher {
    pub fn new(engine: DecorationEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &DecorationEngine {
        &self.engine
    }

    /// Validate `decoration` for the collection's kind, then apply it.
    ///
    /// Kinds without a capability entry are rejected before the engine is
    /// consulted. Validation failures leave the records untouched.
    pub fn decorate<D: Decoration>(&self, collection: Collection, decoration: &D) -> Result<Collection> {
        self.admit(collection.kind(), decoration)?;
        self.run(collection, decoration)
    }

    /// Run a pipeline of decorations in order.
    ///
    /// Every step is validated before any of them reads a record; application
    /// then stops at the first failure.
    pub fn decorate_all(&self, collection: Collection, steps: &[DecorationStep]) -> Result<Collection> {
        let kind = collection.kind();
        steps.iter().try_for_each(|step| self.admit(kind, step))?;

        steps
            .iter()
            .try_fold(collection, |collection, step| self.run(collection, step))
    }

    /// Decorate with a caller's sort and paging options.
    pub fn decorate_request(&self, collection: Collection, request: DecorationRequest) -> Result<Collection> {
        self.decorate_all(collection, &request.into_steps())
    }
}

impl DecorationDispatcher {
    fn admit<D: Decoration>(&self, kind: RecordKind, decoration: &D) -> Result<()> {
        if !self.engine.registry().supports(kind) {
            return Err(DecorationError::UnsupportedKind { kind });
        }
        decoration.validate(kind, &self.engine)
    }

    fn run<D: Decoration>(&self, collection: Collection, decoration: &D) -> Result<Collection> {
        debug!(
            kind = %collection.kind(),
            decoration = decoration.name(),
            records = collection.len(),
            "applying decoration"
        );

        let engine = &self.engine;
        let decorated = match collection {
            Collection::Applications(records) => {
                Collection::Applications(decoration.apply(engine, records)?)
            }
            Collection::LogEntries(records) => {
                Collection::LogEntries(decoration.apply(engine, records)?)
            }
            Collection::Settings(records) => Collection::Settings(decoration.apply(engine, records)?),
            Collection::AccessTokens(records) => {
                Collection::AccessTokens(decoration.apply(engine, records)?)
            }
        };
        Ok(decorated)
    }
}
