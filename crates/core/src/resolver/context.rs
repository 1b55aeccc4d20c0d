// Effective input construction
// Merges configured defaults with the per-call selection

use std::collections::BTreeMap;

use crate::model::{Selection, Value};

const UNDEFINED: Value = Value::Undefined;

/// Where an effective value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Selection,
    Default,
}

/// The selection after default substitution.
///
/// All required-axis checks, per-axis lookups, and combination matching run
/// against this map, never against the raw selection.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveInput {
    values: BTreeMap<String, (Value, ValueSource)>,
}

impl EffectiveInput {
    pub fn contains(&self, axis: &str) -> bool {
        self.values.contains_key(axis)
    }

    pub fn get(&self, axis: &str) -> Option<&Value> {
        self.values.get(axis).map(|(value, _)| value)
    }

    pub fn entry(&self, axis: &str) -> Option<(&Value, ValueSource)> {
        self.values.get(axis).map(|(value, source)| (value, *source))
    }

    pub fn source(&self, axis: &str) -> Option<ValueSource> {
        self.values.get(axis).map(|(_, source)| *source)
    }

    /// The value used for combination matching: `Undefined` when absent.
    pub fn value_for_match(&self, axis: &str) -> &Value {
        self.get(axis).unwrap_or(&UNDEFINED)
    }
}

/// Build the effective input: defaults first, then every selection entry on
/// top (selection wins, including explicit `Null`/`Undefined` entries).
pub fn build_effective_input(
    defaults: &BTreeMap<String, Value>,
    selection: &Selection,
) -> EffectiveInput {
    let mut values: BTreeMap<String, (Value, ValueSource)> = defaults
        .iter()
        .map(|(axis, value)| (axis.clone(), (value.clone(), ValueSource::Default)))
        .collect();

    for (axis, value) in selection.iter() {
        values.insert(axis.to_string(), (value.clone(), ValueSource::Selection));
    }

    EffectiveInput { values }
}
