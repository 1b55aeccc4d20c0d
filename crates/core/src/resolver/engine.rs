// Resolution engine - main entry point
// Turns (config, selection) into ordered fragment groups and joins them

use thiserror::Error;
use tracing::debug;

use crate::model::{Fragments, Selection, VariantConfig};
use crate::resolver::context::build_effective_input;
use crate::resolver::diagnostics::{
    AxisDiagnostic, DiagnosticOutcome, ResolutionDiagnostic, RuleDiagnostic,
};
use crate::resolver::joiner::{Joiner, SpaceJoiner};
use crate::resolver::matcher::{first_failed_axis, format_rule_reason};
use crate::validation::{validate_config, ConfigError};

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("required axes missing: {}", .axes.join(", "))]
    MissingRequiredAxes {
        /// Missing axes in declaration order.
        axes: Vec<String>,
        diagnostic: ResolutionDiagnostic,
    },

    #[error("axis '{axis}' has no value registered under key '{key}'")]
    UnknownAxisValue {
        axis: String,
        key: String,
        diagnostic: ResolutionDiagnostic,
    },
}

/// Output of a traced resolve call.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<O> {
    pub output: O,
    pub diagnostic: ResolutionDiagnostic,
}

/// A built resolver: the immutable configuration, the required-axis list
/// precomputed at construction, and the injected joiner.
///
/// `resolve` is a pure function of the selection; a resolver can be shared
/// freely across threads when its joiner can.
#[derive(Debug, Clone)]
pub struct VariantResolver<J: Joiner = SpaceJoiner> {
    config: VariantConfig,
    required_axes: Vec<String>,
    joiner: J,
}

impl VariantResolver<SpaceJoiner> {
    /// Build a resolver with the reference space-joining composer.
    ///
    /// Validates the configuration eagerly; an invalid configuration never
    /// produces a resolver.
    pub fn build(config: VariantConfig) -> Result<Self, ConfigError> {
        Self::with_joiner(config, SpaceJoiner)
    }
}

impl<J: Joiner> VariantResolver<J> {
    pub fn with_joiner(config: VariantConfig, joiner: J) -> Result<Self, ConfigError> {
        validate_config(&config)?;

        let required_axes = config
            .axes
            .iter()
            .map(|axis| axis.name.clone())
            .filter(|name| !config.optional.contains(name))
            .collect();

        Ok(Self {
            config,
            required_axes,
            joiner,
        })
    }

    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    /// Declared axes minus optional ones, in declaration order.
    pub fn required_axes(&self) -> &[String] {
        &self.required_axes
    }

    /// Resolve a selection to the joiner's output.
    pub fn resolve(&self, selection: &Selection) -> Result<J::Output, ResolveError> {
        let (groups, _) = self.collect_groups(selection)?;
        Ok(self.joiner.join(&groups))
    }

    /// Resolve and keep the per-call diagnostic alongside the output.
    pub fn resolve_traced(&self, selection: &Selection) -> Result<Resolution<J::Output>, ResolveError> {
        let (groups, diagnostic) = self.collect_groups(selection)?;
        Ok(Resolution {
            output: self.joiner.join(&groups),
            diagnostic,
        })
    }

    /// The ordered fragment groups (base first) without joining, for callers
    /// that bring their own composition.
    pub fn resolve_fragments(&self, selection: &Selection) -> Result<Vec<Fragments>, ResolveError> {
        Ok(self.collect_groups(selection)?.0)
    }

    fn collect_groups(
        &self,
        selection: &Selection,
    ) -> Result<(Vec<Fragments>, ResolutionDiagnostic), ResolveError> {
        let input = build_effective_input(&self.config.defaults, selection);
        let mut diagnostic = ResolutionDiagnostic::new();

        let missing: Vec<String> = self
            .required_axes
            .iter()
            .filter(|axis| !input.contains(axis.as_str()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            debug!(missing = ?missing, "resolution aborted: required axes missing");
            diagnostic.set_outcome(DiagnosticOutcome::MissingRequiredAxes);
            return Err(ResolveError::MissingRequiredAxes {
                axes: missing,
                diagnostic,
            });
        }

        let mut groups = Vec::new();
        if let Some(base) = &self.config.base {
            groups.push(base.clone());
        }

        // Axis fragments first, in declaration order.
        for axis in &self.config.axes {
            let Some((value, source)) = input.entry(&axis.name) else {
                diagnostic.add_axis(AxisDiagnostic::absent(axis.name.clone()));
                continue;
            };

            let key = value.key();
            let Some(fragments) = axis.fragments_for(&key) else {
                debug!(axis = %axis.name, key = %key, "resolution aborted: unknown axis value");
                diagnostic.set_outcome(DiagnosticOutcome::UnknownAxisValue);
                return Err(ResolveError::UnknownAxisValue {
                    axis: axis.name.clone(),
                    key: key.0,
                    diagnostic,
                });
            };

            diagnostic.add_axis(AxisDiagnostic::resolved(
                axis.name.clone(),
                key.0.clone(),
                source,
            ));
            groups.push(fragments.clone());
        }

        // Then combinations, in declaration order, evaluated independently.
        for (index, rule) in self.config.combinations.iter().enumerate() {
            let failed_axis = first_failed_axis(rule, &input);
            let matched = failed_axis.is_none();
            diagnostic.add_rule(RuleDiagnostic::evaluated(
                rule.label(index),
                matched,
                format_rule_reason(rule, failed_axis),
            ));
            if matched {
                groups.push(rule.fragments.clone());
            }
        }

        debug!(groups = groups.len(), "resolution complete");
        Ok((groups, diagnostic))
    }
}
