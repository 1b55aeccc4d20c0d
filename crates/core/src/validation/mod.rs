//! Eager configuration validation.
//!
//! Runs at build time so a misauthored configuration fails fast instead of
//! surfacing on the first resolve call.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::{Matcher, VariantConfig};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("duplicate axis '{0}'")]
    DuplicateAxis(String),

    #[error("defaults reference undeclared axis '{0}'")]
    UnknownDefaultAxis(String),

    #[error("default for axis '{axis}' is not a declared value-key: '{key}'")]
    UnknownDefaultValue { axis: String, key: String },

    #[error("optional list references undeclared axis '{0}'")]
    UnknownOptionalAxis(String),

    #[error("combination '{rule}' references undeclared axis '{axis}'")]
    UnknownMatchAxis { rule: String, axis: String },

    #[error("combination '{rule}' has an empty candidate set for axis '{axis}'")]
    EmptyCandidateSet { rule: String, axis: String },
}

/// Check every cross-reference in a configuration. First problem wins.
pub fn validate_config(config: &VariantConfig) -> Result<(), ConfigError> {
    let mut seen = BTreeSet::new();
    for axis in &config.axes {
        if !seen.insert(axis.name.as_str()) {
            return Err(ConfigError::DuplicateAxis(axis.name.clone()));
        }
    }

    for (axis_name, value) in &config.defaults {
        let Some(axis) = config.axis(axis_name) else {
            return Err(ConfigError::UnknownDefaultAxis(axis_name.clone()));
        };
        let key = value.key();
        if axis.fragments_for(&key).is_none() {
            return Err(ConfigError::UnknownDefaultValue {
                axis: axis_name.clone(),
                key: key.0,
            });
        }
    }

    for axis_name in &config.optional {
        if !config.has_axis(axis_name) {
            return Err(ConfigError::UnknownOptionalAxis(axis_name.clone()));
        }
    }

    for (index, rule) in config.combinations.iter().enumerate() {
        for (axis_name, matcher) in &rule.match_values {
            if !config.has_axis(axis_name) {
                return Err(ConfigError::UnknownMatchAxis {
                    rule: rule.label(index),
                    axis: axis_name.clone(),
                });
            }
            if let Matcher::AnyOf(candidates) = matcher {
                if candidates.is_empty() {
                    return Err(ConfigError::EmptyCandidateSet {
                        rule: rule.label(index),
                        axis: axis_name.clone(),
                    });
                }
            }
        }
    }

    Ok(())
}
