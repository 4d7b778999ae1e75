//! Step registry capability interface
//!
//! Steps are an open vocabulary registered by the host. The renderer
//! validates only structurally against the schemas declared here (the kind
//! exists, parameter types match the declared field types) and defers
//! semantic validation to the execution engine.

mod builtin;

pub use builtin::BuiltinRegistry;

use crate::pipeline::errors::RenderError;
use crate::pipeline::steps::ParamValue;
use ahash::AHashMap;
use indexmap::IndexMap;

/// Declared type of a step parameter field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// String field
    String,

    /// Boolean field
    Bool,

    /// Single-precision float field
    Float,

    /// Double-precision float field
    Double,

    /// Integer field
    Int,

    /// Any type outside the supported primitive set
    Other,
}

impl FieldType {
    /// True when the value carries exactly this declared type.
    #[must_use]
    pub fn matches(self, value: &ParamValue) -> bool {
        matches!(
            (self, value),
            (Self::String, ParamValue::Str(_))
                | (Self::Bool, ParamValue::Bool(_))
                | (Self::Float, ParamValue::Float(_))
                | (Self::Double, ParamValue::Double(_))
                | (Self::Int, ParamValue::Int(_))
        )
    }
}

/// Descriptor of a registered step kind and its parameter schema
#[derive(Debug, Clone)]
pub struct StepKind {
    function_name: String,
    fields: AHashMap<String, FieldType>,
    accepts_default_parameter: bool,
    configurable: bool,
}

impl StepKind {
    /// Creates a descriptor with no fields and no default-parameter form.
    #[must_use]
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            fields: AHashMap::new(),
            accepts_default_parameter: false,
            configurable: true,
        }
    }

    /// Declares the single-argument default-parameter form.
    #[must_use]
    pub fn with_default_parameter(mut self) -> Self {
        self.accepts_default_parameter = true;
        self
    }

    /// Declares a named field and its type.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.insert(name.into(), field_type);
        self
    }

    /// Marks the kind as having no configurator.
    #[must_use]
    pub fn without_configurator(mut self) -> Self {
        self.configurable = false;
        self
    }

    /// Engine-facing function name of the step.
    #[must_use]
    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    /// Declared type of a field, or `None` when the kind has no such field.
    #[must_use]
    pub fn field_type(&self, field: &str) -> Option<FieldType> {
        self.fields.get(field).copied()
    }

    /// True when the kind supports the single-argument form.
    #[must_use]
    pub fn accepts_default_parameter(&self) -> bool {
        self.accepts_default_parameter
    }

    /// True when a configurator is registered for the kind.
    #[must_use]
    pub fn is_configurable(&self) -> bool {
        self.configurable
    }
}

/// A validated, strongly typed step invocation ready for serialization
#[derive(Debug, Clone, PartialEq)]
pub struct StepInvocation {
    function_name: String,
    args: InvocationArgs,
}

/// Arguments of a constructed invocation
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationArgs {
    /// Single positional argument
    Positional(ParamValue),

    /// Named arguments in authored order
    Named(IndexMap<String, ParamValue>),
}

impl StepInvocation {
    /// Builds the single-argument form.
    #[must_use]
    pub fn positional(function_name: impl Into<String>, value: ParamValue) -> Self {
        Self {
            function_name: function_name.into(),
            args: InvocationArgs::Positional(value),
        }
    }

    /// Builds the named form.
    #[must_use]
    pub fn named(
        function_name: impl Into<String>,
        params: IndexMap<String, ParamValue>,
    ) -> Self {
        Self {
            function_name: function_name.into(),
            args: InvocationArgs::Named(params),
        }
    }

    /// Engine-facing function name.
    #[must_use]
    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    /// Arguments of the invocation.
    #[must_use]
    pub fn args(&self) -> &InvocationArgs {
        &self.args
    }
}

/// Lookup, construction and serialization capability for step kinds.
///
/// Implementations are read-only from the renderer's perspective and must
/// be safe to share across concurrent renders.
pub trait StepRegistry: Send + Sync {
    /// Resolves a step kind by name.
    fn lookup(&self, name: &str) -> Option<&StepKind>;

    /// Declared type of a named field; `None` when the kind declares no
    /// such field.
    fn field_type(&self, kind: &StepKind, field: &str) -> Option<FieldType> {
        kind.field_type(field)
    }

    /// Constructs an invocation from a typed named-parameter mapping.
    ///
    /// # Errors
    ///
    /// [`RenderError::Configuration`] when the kind has no configurator;
    /// [`RenderError::Construction`] for other construction failures.
    fn configure(
        &self,
        kind: &StepKind,
        params: IndexMap<String, ParamValue>,
    ) -> Result<StepInvocation, RenderError>;

    /// Serializes a constructed invocation to canonical step call text:
    /// a single line without a trailing newline.
    fn serialize(&self, invocation: &StepInvocation) -> String;
}
