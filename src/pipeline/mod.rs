//! Pipeline domain model
//!
//! Immutable value types describing a pipeline: agents, steps, stages and
//! publishing configuration. All of them are built by the caller before
//! rendering; the renderer never mutates or retains them.

pub mod agent;
pub mod errors;
pub mod publish;
pub mod stage;
pub mod steps;

pub use agent::{Agent, AgentKind, AgentSentinel, BuildFileSpec, ImageSpec};
pub use errors::{RenderError, ValidationError};
pub use publish::{ArtifactCopy, ArtifactPublishingConfig, GitConfig};
pub use stage::{Stage, StageRole};
pub use steps::{ParamValue, Step, StepArgs};

/// Trait for model types that can be validated before rendering
#[allow(clippy::missing_errors_doc)]
pub trait Validate {
    /// Type of validation error
    type Error;

    /// Validates this value
    fn validate(&self) -> Result<(), Self::Error>;
}
