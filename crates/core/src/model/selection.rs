// Per-call selection of axis values

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::value::Value;

/// A transient selection of axis values for one resolve call.
///
/// Membership is key presence, not value truthiness: an axis explicitly set
/// to `Value::Bool(false)`, `Value::Null`, or `Value::Undefined` counts as
/// present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeMap<String, Value>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, axis: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(axis.into(), value.into());
    }

    pub fn get(&self, axis: &str) -> Option<&Value> {
        self.0.get(axis)
    }

    pub fn contains(&self, axis: &str) -> bool {
        self.0.contains_key(axis)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(axis, value)| (axis.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Selection {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        Selection(
            entries
                .into_iter()
                .map(|(axis, value)| (axis.into(), value.into()))
                .collect(),
        )
    }
}
