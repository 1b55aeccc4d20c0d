//! Variation resolution engine.
//!
//! This module turns a built configuration plus a per-call selection into an
//! ordered list of fragment groups and hands the list to the injected joiner.
//!
//! # Example
//!
//! ```ignore
//! use vary_core::{Selection, VariantResolver};
//!
//! let resolver = VariantResolver::build(config)?;
//! let output = resolver.resolve(&Selection::from_iter([("size", "sm")]))?;
//! ```

pub mod context;
pub mod diagnostics;
pub mod engine;
pub mod joiner;
pub mod matcher;
