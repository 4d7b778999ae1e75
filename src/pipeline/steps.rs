//! Step types
//!
//! A step names an operation from the step registry together with either a
//! single default parameter or a map of named, typed parameters. The two
//! argument forms are mutually exclusive by construction.

use super::Validate;
use super::errors::ValidationError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parameter value of one of the five supported primitive types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Boolean parameter
    Bool(bool),

    /// Integer parameter
    Int(i32),

    /// Double-precision float parameter
    Double(f64),

    /// Single-precision float parameter
    Float(f32),

    /// String parameter
    Str(String),
}

impl ParamValue {
    /// Short name of the carried type, for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Double(_) => "double",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Double(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Argument forms of a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepArgs {
    /// Single unnamed positional argument, always string-typed
    Default(String),

    /// Named arguments in authored order
    Named(IndexMap<String, ParamValue>),
}

/// A single step invocation inside a stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Step kind name, resolved against the registry
    pub name: String,

    /// Arguments of the invocation
    pub args: StepArgs,
}

impl Step {
    /// Creates a step with a single default parameter.
    #[must_use]
    pub fn with_default(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: StepArgs::Default(value.into()),
        }
    }

    /// Creates a step with named parameters in the given order.
    #[must_use]
    pub fn with_named<K, V>(name: impl Into<String>, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        Self {
            name: name.into(),
            args: StepArgs::Named(
                params
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            ),
        }
    }

    /// The default parameter, when this step uses the single-argument form.
    #[must_use]
    pub fn default_parameter(&self) -> Option<&str> {
        match &self.args {
            StepArgs::Default(value) => Some(value),
            StepArgs::Named(_) => None,
        }
    }

    /// The named parameters, when this step uses the named form.
    #[must_use]
    pub fn named_parameters(&self) -> Option<&IndexMap<String, ParamValue>> {
        match &self.args {
            StepArgs::Default(_) => None,
            StepArgs::Named(params) => Some(params),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.args {
            StepArgs::Default(value) => write!(f, "{}({value})", self.name),
            StepArgs::Named(params) => write!(f, "{}({} parameters)", self.name, params.len()),
        }
    }
}

impl Validate for Step {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if let StepArgs::Named(params) = &self.args {
            if params.keys().any(String::is_empty) {
                return Err(ValidationError::EmptyParameterName {
                    step: self.name.clone(),
                });
            }
        }
        Ok(())
    }
}
