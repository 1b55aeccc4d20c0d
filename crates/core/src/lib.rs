//! Declarative variation resolver.
//!
//! A [`VariantConfig`] names axes of variation (each with a closed set of
//! value-keys mapping to output fragments), defaults, optional axes, and
//! cross-axis combination rules. A built [`VariantResolver`] turns a per-call
//! [`Selection`] into an ordered fragment list and hands it to an injected
//! [`Joiner`] (by default [`SpaceJoiner`], which space-concatenates).

pub mod error;
pub mod model;
pub mod resolver;
pub mod validation;

pub use error::{CoreError, Result};
pub use model::{AxisDef, CombinationRule, Fragments, Matcher, Selection, Value, ValueKey, VariantConfig};
pub use resolver::diagnostics::{
    AxisDiagnostic, AxisSource, DiagnosticOutcome, ResolutionDiagnostic, RuleDiagnostic,
};
pub use resolver::engine::{Resolution, ResolveError, VariantResolver};
pub use resolver::joiner::{Joiner, SpaceJoiner};
pub use validation::{validate_config, ConfigError};
