//! Step resolution and serialization
//!
//! Maps a step name plus loosely typed parameter bag to a validated,
//! strongly typed invocation via the step registry, then serializes it to
//! script text.

use std::borrow::Cow;

use super::SnippetRenderer;
use crate::pipeline::errors::RenderError;
use crate::pipeline::steps::{ParamValue, Step, StepArgs};
use crate::registry::{FieldType, StepInvocation, StepKind, StepRegistry};
use indexmap::IndexMap;
use tracing::warn;

impl SnippetRenderer<'_> {
    /// Resolves a step against the registry and serializes it to script
    /// text, newline-terminated.
    ///
    /// # Errors
    ///
    /// [`RenderError::UnknownStep`] when the name is not registered,
    /// [`RenderError::Configuration`] when the kind has no configurator,
    /// [`RenderError::UnknownField`] for a named parameter the kind does
    /// not declare, and [`RenderError::Construction`] when the kind cannot
    /// be built from the given argument form. Parameters with unsupported
    /// or mismatched types are dropped with a warning instead of failing
    /// the step.
    pub fn render_step(&self, step: &Step) -> Result<String, RenderError> {
        let step = self.with_script_suffix(step);

        let kind = self
            .registry()
            .lookup(&step.name)
            .ok_or_else(|| RenderError::UnknownStep {
                name: step.name.clone(),
            })?;

        let invocation = match &step.args {
            StepArgs::Default(value) => {
                if !kind.accepts_default_parameter() {
                    return Err(RenderError::Construction {
                        step: step.name.clone(),
                        message: "step does not take a default parameter".to_string(),
                    });
                }
                // Default parameters are always string-typed.
                StepInvocation::positional(kind.function_name(), ParamValue::Str(value.clone()))
            }
            StepArgs::Named(params) => {
                let mapping = self.typed_mapping(kind, &step.name, params)?;
                self.registry().configure(kind, mapping)?
            }
        };

        let mut snippet = self.registry().serialize(&invocation);
        snippet.push('\n');
        Ok(snippet)
    }

    /// Builds the typed mapping handed to the configurator. Parameters
    /// whose declared type is unsupported, or whose value does not match
    /// the declared type exactly, are dropped with a warning.
    fn typed_mapping(
        &self,
        kind: &StepKind,
        step_name: &str,
        params: &IndexMap<String, ParamValue>,
    ) -> Result<IndexMap<String, ParamValue>, RenderError> {
        let mut mapping = IndexMap::new();

        for (field, value) in params {
            let Some(declared) = self.registry().field_type(kind, field) else {
                return Err(RenderError::UnknownField {
                    step: step_name.to_string(),
                    parameter: field.clone(),
                });
            };

            if declared == FieldType::Other {
                let dropped = RenderError::UnsupportedParameterType {
                    step: step_name.to_string(),
                    parameter: field.clone(),
                };
                warn!(step = step_name, parameter = %field, "{dropped}");
                continue;
            }

            if !declared.matches(value) {
                warn!(
                    step = step_name,
                    parameter = %field,
                    expected = ?declared,
                    supplied = value.type_name(),
                    "parameter type mismatch, parameter skipped"
                );
                continue;
            }

            mapping.insert(field.clone(), value.clone());
        }

        Ok(mapping)
    }

    /// Rewrites the script parameter of an `sh` step so the invocation
    /// carries the platform-specific script file extension.
    fn with_script_suffix<'s>(&self, step: &'s Step) -> Cow<'s, Step> {
        if step.name != "sh" {
            return Cow::Borrowed(step);
        }

        let mut rewritten = step.clone();
        match &mut rewritten.args {
            StepArgs::Default(value) => *value = self.complete_script_path(value),
            StepArgs::Named(params) => {
                if let Some(ParamValue::Str(script)) = params.get_mut("script") {
                    *script = self.complete_script_path(script);
                }
            }
        }
        Cow::Owned(rewritten)
    }

    fn complete_script_path(&self, stem: &str) -> String {
        if self.is_unix() {
            format!("{stem}.sh")
        } else {
            format!("{stem}.bat")
        }
    }
}
