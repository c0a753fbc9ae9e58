//! Decoration module for ordering and paging record collections
//!
//! This module provides:
//! - Core traits for decoratable records and decorations
//! - Static field tables and field resolution
//! - The capability registry of orderable fields per kind
//! - Ordering strategies, pagination and the generic engine
//! - The dispatcher that routes typed collections through the engine

pub mod dispatch;
pub mod engine;
pub mod fields;
pub mod impls;
pub mod pagination;
pub mod registry;
pub mod request;
pub mod strategy;
pub mod traits;
pub mod utils;
pub mod values;


pub use dispatch::DecorationDispatcher;
pub use engine::{DecorationEngine, DecorationReport};
pub use fields::{Extractor, FieldHandle, FieldSpec, resolve_field};
pub use impls::field_names;
pub use pagination::Pagination;
pub use registry::CapabilityRegistry;
pub use request::{DecorationRequest, DecorationStep};
pub use strategy::{ChainedOrdering, OrderingStrategy, SortDirection};
pub use traits::{Decoration, Record};
pub use values::{FieldValue, compare_values};
