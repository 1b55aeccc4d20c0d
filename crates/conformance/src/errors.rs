use std::path::PathBuf;

use thiserror::Error;
use vary_core::{ConfigError, ResolveError};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file '{path}'")]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario file '{path}'")]
    FixtureParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("scenario '{scenario}' has an invalid configuration")]
    InvalidConfig {
        scenario: String,
        #[source]
        source: ConfigError,
    },

    #[error("scenario '{scenario}' case '{case}': expected {expected:?}, got {actual:?}")]
    OutputMismatch {
        scenario: String,
        case: String,
        expected: Option<String>,
        actual: Option<String>,
    },

    #[error("scenario '{scenario}' case '{case}': expected a failure, got {output:?}")]
    UnexpectedSuccess {
        scenario: String,
        case: String,
        output: Option<String>,
    },

    #[error("scenario '{scenario}' case '{case}': unexpected failure")]
    UnexpectedFailure {
        scenario: String,
        case: String,
        #[source]
        source: ResolveError,
    },

    #[error(
        "scenario '{scenario}' case '{case}': failure did not match expectation (got: {actual})"
    )]
    WrongFailure {
        scenario: String,
        case: String,
        actual: String,
    },
}
