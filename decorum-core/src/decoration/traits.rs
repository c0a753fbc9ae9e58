//! Core traits for decoratable records
//!
//! Every record type that can flow through the engine implements [`Record`],
//! binding it to its [`RecordKind`] and its static field table. Every
//! transformation the engine can run implements [`Decoration`].

use super::engine::DecorationEngine;
use super::fields::FieldSpec;
use crate::error::Result;
use decorum_model::RecordKind;
use std::fmt::Debug;

/// A record shape the engine knows how to read.
pub trait Record: Send + Sync + Sized + 'static {
    /// The kind every value of this type belongs to
    const KIND: RecordKind;

    /// Logical field name to extractor table for this shape.
    ///
    /// Lists every field of the shape, orderable or not. Whether a field may
    /// be used as a sort key is decided by the capability registry.
    fn field_table() -> &'static [FieldSpec<Self>];
}

/// A post-processing transformation over a homogeneous collection.
///
/// `validate` must not look at any records; it runs before the collection is
/// touched so invalid requests fail fast.
pub trait Decoration: Debug + Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Check that this decoration is legal for the given kind.
    fn validate(&self, kind: RecordKind, engine: &DecorationEngine) -> Result<()>;

    /// Transform the records. Ownership of the collection moves into the
    /// call and the transformed collection is handed back.
    fn apply<R: Record>(&self, engine: &DecorationEngine, records: Vec<R>) -> Result<Vec<R>>;
}
