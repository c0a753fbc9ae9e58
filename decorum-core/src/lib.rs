//! # Decorum Core
//!
//! Post-processing for backend result collections: capability-checked,
//! stable ordering and pagination over a closed set of record kinds, with no
//! per-type sort code at call sites.
//!
//! ## Overview
//!
//! - **Capability registry**: which logical fields may order which kind
//! - **Field resolution**: static per-kind tables from wire name to extractor
//! - **Decoration engine**: validation plus a generic stable sort
//! - **Dispatcher**: routes a typed [`Collection`](decorum_model::Collection)
//!   through the engine and rewraps the result
//!
//! ## Examples
//!
//! ```no_run
//! use decorum_core::prelude::*;
//!
//! fn newest_first(logs: Collection) -> Result<Collection, DecorationError> {
//!     let dispatcher = DecorationDispatcher::default();
//!     dispatcher.decorate(logs, &OrderingStrategy::descending("timestamp"))
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Engine configuration loading
pub mod config;
/// Ordering and pagination of record collections
pub mod decoration;
/// Error types
pub mod error;
/// Intentional crate surface for request handlers
pub mod prelude;

pub use config::DecorationConfig;
pub use error::{ConfigError, DecorationError, ErrorCategory, Result};
