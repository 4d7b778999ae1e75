//! Error types for snippet generation

use thiserror::Error;

/// Errors raised while rendering a pipeline model to script text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Step name is not present in the step registry
    #[error("no step exists with the name '{name}'")]
    UnknownStep {
        /// The unresolved step name.
        name: String,
    },

    /// Registry has no configurator for a resolved step kind
    #[error("no configurator registered for step '{name}', have you installed the required plugin?")]
    Configuration {
        /// Name of the step kind without a configurator.
        name: String,
    },

    /// Named parameter is not declared by the step kind
    #[error("step '{step}' has no parameter named '{parameter}'")]
    UnknownField {
        /// Step kind name.
        step: String,
        /// The undeclared parameter name.
        parameter: String,
    },

    /// Declared parameter type is outside the supported primitive set.
    ///
    /// Non-fatal: the resolver logs this and drops the parameter.
    #[error("parameter '{parameter}' of step '{step}' has an unsupported type and is skipped")]
    UnsupportedParameterType {
        /// Step kind name.
        step: String,
        /// The dropped parameter name.
        parameter: String,
    },

    /// Step construction failed in the registry
    #[error("could not construct step '{step}': {message}")]
    Construction {
        /// Step kind name.
        step: String,
        /// Reason reported by the registry.
        message: String,
    },

    /// A model failed validation
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for pipeline model types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name cannot be empty
    #[error("name cannot be empty")]
    EmptyName,

    /// Name too long
    #[error("name too long: max {max} characters, got {len}")]
    NameTooLong {
        /// Maximum allowed length.
        max: usize,
        /// Actual length of the name.
        len: usize,
    },

    /// Stage must have at least one step
    #[error("stage '{stage}' must have at least one step")]
    EmptyStage {
        /// Name of the empty stage.
        stage: String,
    },

    /// Invalid agent specification
    #[error("invalid agent: {0}")]
    InvalidAgent(String),

    /// Named step parameter with an empty name
    #[error("step '{step}' has a parameter with an empty name")]
    EmptyParameterName {
        /// Step kind name.
        step: String,
    },

    /// Publishing configuration field left empty
    #[error("artifact publishing config is missing '{field}'")]
    MissingPublishingField {
        /// The empty field.
        field: &'static str,
    },
}
