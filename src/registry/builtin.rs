//! In-memory step registry with the standard step vocabulary

use super::{FieldType, InvocationArgs, StepInvocation, StepKind, StepRegistry};
use crate::pipeline::errors::RenderError;
use crate::pipeline::steps::ParamValue;
use crate::text::single_quoted;
use ahash::AHashMap;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Step registry backed by a process-local table.
///
/// Comes pre-populated with the standard step vocabulary via
/// [`with_standard_steps`](Self::with_standard_steps); hosts register
/// plugin-provided kinds on top with [`register`](Self::register).
#[derive(Debug, Default)]
pub struct BuiltinRegistry {
    kinds: AHashMap<String, StepKind>,
}

impl BuiltinRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with the standard steps.
    #[must_use]
    pub fn with_standard_steps() -> Self {
        let mut registry = Self::empty();
        for kind in standard_kinds() {
            registry.register(kind);
        }
        registry
    }

    /// Process-wide registry of the standard steps.
    #[must_use]
    pub fn standard() -> &'static Self {
        static STANDARD: Lazy<BuiltinRegistry> = Lazy::new(BuiltinRegistry::with_standard_steps);
        &STANDARD
    }

    /// Registers a step kind under its function name; a later registration
    /// with the same name replaces the earlier one.
    pub fn register(&mut self, kind: StepKind) {
        self.kinds.insert(kind.function_name().to_string(), kind);
    }

    /// True when a kind with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    /// Names of all registered kinds, in no particular order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.kinds.keys().map(String::as_str).collect()
    }
}

impl StepRegistry for BuiltinRegistry {
    fn lookup(&self, name: &str) -> Option<&StepKind> {
        self.kinds.get(name)
    }

    fn configure(
        &self,
        kind: &StepKind,
        params: IndexMap<String, ParamValue>,
    ) -> Result<StepInvocation, RenderError> {
        if !kind.is_configurable() {
            return Err(RenderError::Configuration {
                name: kind.function_name().to_string(),
            });
        }
        Ok(StepInvocation::named(kind.function_name(), params))
    }

    fn serialize(&self, invocation: &StepInvocation) -> String {
        match invocation.args() {
            InvocationArgs::Positional(value) => {
                format!("{} {}", invocation.function_name(), groovy_value(value))
            }
            InvocationArgs::Named(params) if params.is_empty() => {
                format!("{}()", invocation.function_name())
            }
            InvocationArgs::Named(params) => {
                let rendered: Vec<String> = params
                    .iter()
                    .map(|(key, value)| format!("{key}: {}", groovy_value(value)))
                    .collect();
                format!("{} {}", invocation.function_name(), rendered.join(", "))
            }
        }
    }
}

/// Groovy literal for a parameter value; strings are single-quoted.
fn groovy_value(value: &ParamValue) -> String {
    match value {
        ParamValue::Str(text) => single_quoted(text),
        other => other.to_string(),
    }
}

/// The step vocabulary every execution engine installation provides.
fn standard_kinds() -> Vec<StepKind> {
    vec![
        StepKind::new("sh")
            .with_default_parameter()
            .field("script", FieldType::String)
            .field("label", FieldType::String)
            .field("returnStdout", FieldType::Bool)
            .field("returnStatus", FieldType::Bool),
        StepKind::new("bat")
            .with_default_parameter()
            .field("script", FieldType::String)
            .field("returnStdout", FieldType::Bool)
            .field("returnStatus", FieldType::Bool),
        StepKind::new("echo")
            .with_default_parameter()
            .field("message", FieldType::String),
        StepKind::new("junit")
            .with_default_parameter()
            .field("testResults", FieldType::String)
            .field("allowEmptyResults", FieldType::Bool)
            .field("keepLongStdio", FieldType::Bool)
            .field("healthScaleFactor", FieldType::Double),
        StepKind::new("archiveArtifacts")
            .with_default_parameter()
            .field("artifacts", FieldType::String)
            .field("excludes", FieldType::String)
            .field("fingerprint", FieldType::Bool)
            .field("allowEmptyArchive", FieldType::Bool)
            .field("onlyIfSuccessful", FieldType::Bool),
        StepKind::new("stash")
            .field("name", FieldType::String)
            .field("includes", FieldType::String)
            .field("excludes", FieldType::String)
            .field("useDefaultExcludes", FieldType::Bool),
        StepKind::new("unstash")
            .with_default_parameter()
            .field("name", FieldType::String),
        StepKind::new("timeout")
            .field("time", FieldType::Int)
            .field("unit", FieldType::String),
        StepKind::new("retry").field("count", FieldType::Int),
        StepKind::new("sleep")
            .with_default_parameter()
            .field("time", FieldType::Int)
            .field("unit", FieldType::String),
        StepKind::new("error")
            .with_default_parameter()
            .field("message", FieldType::String),
        StepKind::new("dir")
            .with_default_parameter()
            .field("path", FieldType::String),
        StepKind::new("deleteDir"),
        StepKind::new("input")
            .with_default_parameter()
            .field("message", FieldType::String)
            .field("id", FieldType::String)
            .field("ok", FieldType::String),
        StepKind::new("checkout")
            .field("scm", FieldType::Other)
            .field("poll", FieldType::Bool),
        StepKind::new("git")
            .with_default_parameter()
            .field("url", FieldType::String)
            .field("branch", FieldType::String)
            .field("credentialsId", FieldType::String),
        StepKind::new("findbugs").field("pattern", FieldType::String),
        StepKind::new("writeFile")
            .field("file", FieldType::String)
            .field("text", FieldType::String),
        StepKind::new("readFile")
            .with_default_parameter()
            .field("file", FieldType::String)
            .field("encoding", FieldType::String),
    ]
}
