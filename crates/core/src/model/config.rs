// Variation configuration model
// Defines VariantConfig, AxisDef, CombinationRule, and Matcher

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::fragments::Fragments;
use crate::model::value::{Value, ValueKey};

/// A declarative variation configuration.
///
/// Axes are an ordered sequence: the `Vec` order is the declaration order and
/// determines the order of per-axis fragments in the output. Combinations are
/// likewise ordered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VariantConfig {
    #[serde(default)]
    pub base: Option<Fragments>,
    #[serde(default)]
    pub axes: Vec<AxisDef>,
    #[serde(default)]
    pub defaults: BTreeMap<String, Value>,
    #[serde(default)]
    pub optional: Vec<String>,
    #[serde(default)]
    pub combinations: Vec<CombinationRule>,
}

impl VariantConfig {
    /// Look up an axis definition by name.
    pub fn axis(&self, name: &str) -> Option<&AxisDef> {
        self.axes.iter().find(|axis| axis.name == name)
    }

    pub fn has_axis(&self, name: &str) -> bool {
        self.axis(name).is_some()
    }
}

/// A named dimension of variation with a closed set of value-keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxisDef {
    pub name: String,
    pub values: BTreeMap<ValueKey, Fragments>,
}

impl AxisDef {
    pub fn fragments_for(&self, key: &ValueKey) -> Option<&Fragments> {
        self.values.get(key)
    }
}

/// A cross-axis conditional contribution.
///
/// Fires when every entry in `match_values` is satisfied by the effective
/// input; an axis not named in the map is unconstrained, and an empty map
/// always matches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CombinationRule {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "match")]
    pub match_values: BTreeMap<String, Matcher>,
    pub fragments: Fragments,
}

impl CombinationRule {
    /// Stable label for diagnostics: the rule name or its position.
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("combination[{}]", index),
        }
    }
}

/// A match predicate for one axis: a single value or a candidate set.
///
/// Matching compares raw values by strict equality, never stringified form;
/// this is where `Null`, `Undefined`, and `"null"` stay distinct.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Matcher {
    Equals(Value),
    AnyOf(Vec<Value>),
}
