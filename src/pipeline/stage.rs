//! Stage types
//!
//! A stage is a named, ordered sequence of steps plus optional
//! success/always/failure post-action script lists. The stage name doubles
//! as a semantic tag: the well-known `Build` and `Tests` stages get
//! implicit post-action behavior.

use super::Validate;
use super::errors::ValidationError;
use super::steps::Step;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Well-known stage roles derived from the stage name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageRole {
    /// The `Build` stage; archives artifacts and publishes build reports
    Build,

    /// The `Tests` stage; publishes test reports and analysis results
    Tests,

    /// Any other stage; no implicit post-action behavior
    Custom,
}

impl StageRole {
    /// Derives the role from a stage name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Build" => Self::Build,
            "Tests" => Self::Tests,
            _ => Self::Custom,
        }
    }
}

/// A stage in a pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    /// Stage name; `Build` and `Tests` carry implicit behavior
    pub name: String,

    /// Steps in execution order
    pub steps: Vec<Step>,

    /// Script path stems run after the stage succeeds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<Vec<String>>,

    /// Script path stems run regardless of the stage result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always: Option<Vec<String>>,

    /// Script path stems run after the stage fails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<Vec<String>>,
}

impl Stage {
    /// Creates a stage with the given steps and no post actions.
    #[must_use]
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            steps,
            success: None,
            always: None,
            failure: None,
        }
    }

    /// Sets the success script list.
    #[must_use]
    pub fn with_success(mut self, paths: Vec<String>) -> Self {
        self.success = Some(paths);
        self
    }

    /// Sets the always script list.
    #[must_use]
    pub fn with_always(mut self, paths: Vec<String>) -> Self {
        self.always = Some(paths);
        self
    }

    /// Sets the failure script list.
    #[must_use]
    pub fn with_failure(mut self, paths: Vec<String>) -> Self {
        self.failure = Some(paths);
        self
    }

    /// Role derived from the stage name.
    #[must_use]
    pub fn role(&self) -> StageRole {
        StageRole::from_name(&self.name)
    }

    /// True when any explicit post-action script list is present.
    #[must_use]
    pub fn has_explicit_post(&self) -> bool {
        self.success.is_some() || self.always.is_some() || self.failure.is_some()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stage({}, {} steps)", self.name, self.steps.len())
    }
}

impl Validate for Stage {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(ValidationError::NameTooLong {
                max: 100,
                len: self.name.len(),
            });
        }

        if self.steps.is_empty() {
            return Err(ValidationError::EmptyStage {
                stage: self.name.clone(),
            });
        }

        for step in &self.steps {
            step.validate()?;
        }

        Ok(())
    }
}
