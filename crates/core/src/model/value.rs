// Scalar values and stringified value-keys
// Defines the primitive value type shared by selections, defaults, and matchers

use serde::{Deserialize, Serialize};

/// A primitive, strict-equality-comparable value.
///
/// `Undefined` stands for an explicitly-absent value. It has no serialized
/// form; it exists so combination matchers can tell an absent axis apart from
/// an axis set to `Null` or the string `"null"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    #[serde(skip)]
    Undefined,
}

impl Value {
    /// Total stringification used for axis value-key lookup.
    ///
    /// Applied identically when keys are registered and when effective values
    /// are looked up, so the two sides never drift.
    pub fn key_string(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(value) => value.to_string(),
            Value::Int(value) => value.to_string(),
            Value::Float(value) => value.to_string(),
            Value::Str(value) => value.clone(),
            Value::Undefined => "undefined".to_string(),
        }
    }

    /// The value-key this value resolves under.
    pub fn key(&self) -> ValueKey {
        ValueKey(self.key_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

/// A stringified axis value-key.
///
/// Deserializes from any scalar (string, bool, null, number) by stringifying
/// through [`Value`], so `true:` in YAML registers the key `"true"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct ValueKey(pub String);

impl ValueKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Value> for ValueKey {
    fn from(value: Value) -> Self {
        ValueKey(value.key_string())
    }
}

impl From<&str> for ValueKey {
    fn from(key: &str) -> Self {
        ValueKey(key.to_string())
    }
}

impl std::fmt::Display for ValueKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_string_is_total() {
        assert_eq!(Value::Null.key_string(), "null");
        assert_eq!(Value::Undefined.key_string(), "undefined");
        assert_eq!(Value::Bool(true).key_string(), "true");
        assert_eq!(Value::Bool(false).key_string(), "false");
        assert_eq!(Value::Int(42).key_string(), "42");
        assert_eq!(Value::Float(1.5).key_string(), "1.5");
        assert_eq!(Value::Str("sm".to_string()).key_string(), "sm");
    }

    #[test]
    fn test_equality_is_strict() {
        assert_ne!(Value::Null, Value::Undefined);
        assert_ne!(Value::Null, Value::Str("null".to_string()));
        assert_ne!(Value::Int(1), Value::Str("1".to_string()));
        assert_ne!(Value::Bool(true), Value::Str("true".to_string()));
        assert_eq!(Value::Bool(true), Value::Bool(true));
    }

    #[test]
    fn test_untagged_deserialization() {
        assert_eq!(serde_yaml::from_str::<Value>("null").unwrap(), Value::Null);
        assert_eq!(
            serde_yaml::from_str::<Value>("true").unwrap(),
            Value::Bool(true)
        );
        assert_eq!(serde_yaml::from_str::<Value>("7").unwrap(), Value::Int(7));
        assert_eq!(
            serde_yaml::from_str::<Value>("1.25").unwrap(),
            Value::Float(1.25)
        );
        assert_eq!(
            serde_yaml::from_str::<Value>("\"sm\"").unwrap(),
            Value::Str("sm".to_string())
        );
    }

    #[test]
    fn test_value_key_stringifies_scalar_keys() {
        use std::collections::BTreeMap;

        let map: BTreeMap<ValueKey, String> =
            serde_yaml::from_str("true: on\nnull: none\n3: three\nsm: small").unwrap();
        assert!(map.contains_key(&ValueKey::from("true")));
        assert!(map.contains_key(&ValueKey::from("null")));
        assert!(map.contains_key(&ValueKey::from("3")));
        assert!(map.contains_key(&ValueKey::from("sm")));
    }

    #[test]
    fn test_key_matches_registration_side() {
        assert_eq!(Value::Bool(true).key(), ValueKey::from("true"));
        assert_eq!(Value::Float(2.0).key(), ValueKey::from("2"));
    }
}
