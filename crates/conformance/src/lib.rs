//! Fixture-driven conformance harness for the variation resolver.
//!
//! Scenario files pair a configuration with selections and expected outcomes;
//! the runner builds the resolver once per scenario and checks every case.

pub mod errors;
pub mod scenario;

pub use errors::ScenarioError;
pub use scenario::{
    load_scenario, run_fixture, run_scenario, Expectation, ScenarioCase, ScenarioFile,
    UnknownValueExpectation,
};
