//! Data model for variation configurations and selections.

pub mod config;
pub mod fragments;
pub mod selection;
pub mod value;

pub use config::{AxisDef, CombinationRule, Matcher, VariantConfig};
pub use fragments::Fragments;
pub use selection::Selection;
pub use value::{Value, ValueKey};
