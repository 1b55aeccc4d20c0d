// Diagnostic types for resolution tracing
// Records where each effective value came from and which rules fired

use serde::{Deserialize, Serialize};

use crate::resolver::context::ValueSource;

/// Per-call trace of a resolution: one entry per declared axis, one per
/// combination rule, plus the terminal outcome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolutionDiagnostic {
    pub axes: Vec<AxisDiagnostic>,
    pub rules: Vec<RuleDiagnostic>,
    pub outcome: DiagnosticOutcome,
}

/// How one axis contributed to the output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AxisDiagnostic {
    pub axis: String,
    /// The stringified value-key the axis resolved under, absent axes aside.
    pub key: Option<String>,
    pub source: AxisSource,
}

/// Origin of an axis's effective value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AxisSource {
    Selection,
    Default,
    Absent,
}

/// Per-combination evaluation details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleDiagnostic {
    pub rule: String,
    pub matched: bool,
    pub reason: String,
}

/// Terminal status of a resolve call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticOutcome {
    Resolved,
    MissingRequiredAxes,
    UnknownAxisValue,
}

impl ResolutionDiagnostic {
    pub fn new() -> Self {
        Self {
            axes: Vec::new(),
            rules: Vec::new(),
            outcome: DiagnosticOutcome::Resolved,
        }
    }

    pub fn add_axis(&mut self, diagnostic: AxisDiagnostic) {
        self.axes.push(diagnostic);
    }

    pub fn add_rule(&mut self, diagnostic: RuleDiagnostic) {
        self.rules.push(diagnostic);
    }

    pub fn set_outcome(&mut self, outcome: DiagnosticOutcome) {
        self.outcome = outcome;
    }
}

impl Default for ResolutionDiagnostic {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisDiagnostic {
    pub fn resolved(axis: String, key: String, source: ValueSource) -> Self {
        Self {
            axis,
            key: Some(key),
            source: source.into(),
        }
    }

    pub fn absent(axis: String) -> Self {
        Self {
            axis,
            key: None,
            source: AxisSource::Absent,
        }
    }
}

impl From<ValueSource> for AxisSource {
    fn from(source: ValueSource) -> Self {
        match source {
            ValueSource::Selection => AxisSource::Selection,
            ValueSource::Default => AxisSource::Default,
        }
    }
}

impl RuleDiagnostic {
    pub fn evaluated(rule: String, matched: bool, reason: String) -> Self {
        Self {
            rule,
            matched,
            reason,
        }
    }
}
