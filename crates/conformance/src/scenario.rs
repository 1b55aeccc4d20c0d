// Scenario files: a configuration plus expected outcomes per selection

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use vary_core::{ResolveError, Selection, VariantConfig, VariantResolver};

use crate::errors::ScenarioError;

/// One YAML scenario file: a configuration and the cases to run against it.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioFile {
    pub name: String,
    pub config: VariantConfig,
    pub cases: Vec<ScenarioCase>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioCase {
    pub name: String,
    #[serde(default)]
    pub selection: Selection,
    pub expect: Expectation,
}

/// Expected outcome of a case, written as a single-key map in fixtures.
///
/// `output: null` means the joiner reported absence (empty fragment list).
/// The untagged variants are tried in order; `Output` goes last because its
/// field is optional and would otherwise swallow the other forms.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Expectation {
    MissingAxes {
        missing_axes: Vec<String>,
    },
    UnknownValue {
        unknown_value: UnknownValueExpectation,
    },
    Output {
        output: Option<String>,
    },
}

/// The axis/key pair an `unknown_value` expectation names.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UnknownValueExpectation {
    pub axis: String,
    pub key: String,
}

pub fn load_scenario(path: &Path) -> Result<ScenarioFile, ScenarioError> {
    let text = fs::read_to_string(path).map_err(|source| ScenarioError::FixtureRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&text).map_err(|source| ScenarioError::FixtureParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the scenario's resolver once and run every case against it.
pub fn run_scenario(scenario: &ScenarioFile) -> Result<(), ScenarioError> {
    let resolver = VariantResolver::build(scenario.config.clone()).map_err(|source| {
        ScenarioError::InvalidConfig {
            scenario: scenario.name.clone(),
            source,
        }
    })?;

    for case in &scenario.cases {
        run_case(&scenario.name, &resolver, case)?;
    }
    Ok(())
}

/// Load and run one fixture, with path context on failure.
pub fn run_fixture(path: &Path) -> anyhow::Result<()> {
    let scenario =
        load_scenario(path).with_context(|| format!("loading scenario '{}'", path.display()))?;
    run_scenario(&scenario).with_context(|| format!("running scenario '{}'", path.display()))?;
    Ok(())
}

fn run_case(
    scenario: &str,
    resolver: &VariantResolver,
    case: &ScenarioCase,
) -> Result<(), ScenarioError> {
    match (&case.expect, resolver.resolve(&case.selection)) {
        (Expectation::Output { output: expected }, Ok(actual)) => {
            if &actual == expected {
                Ok(())
            } else {
                Err(ScenarioError::OutputMismatch {
                    scenario: scenario.to_string(),
                    case: case.name.clone(),
                    expected: expected.clone(),
                    actual,
                })
            }
        }
        (Expectation::Output { .. }, Err(source)) => Err(ScenarioError::UnexpectedFailure {
            scenario: scenario.to_string(),
            case: case.name.clone(),
            source,
        }),
        (
            Expectation::MissingAxes {
                missing_axes: expected,
            },
            Err(ResolveError::MissingRequiredAxes { ref axes, .. }),
        ) if axes == expected => Ok(()),
        (
            Expectation::UnknownValue { unknown_value },
            Err(ResolveError::UnknownAxisValue {
                ref axis, ref key, ..
            }),
        ) if axis == &unknown_value.axis && key == &unknown_value.key => Ok(()),
        (_, Ok(output)) => Err(ScenarioError::UnexpectedSuccess {
            scenario: scenario.to_string(),
            case: case.name.clone(),
            output,
        }),
        (_, Err(error)) => Err(ScenarioError::WrongFailure {
            scenario: scenario.to_string(),
            case: case.name.clone(),
            actual: error.to_string(),
        }),
    }
}
