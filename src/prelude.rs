//! Prelude module for common imports

// Re-export all pipeline model types with full paths
pub use crate::pipeline::Validate;
pub use crate::pipeline::agent::{Agent, AgentKind, AgentSentinel, BuildFileSpec, ImageSpec};
pub use crate::pipeline::errors::{RenderError, ValidationError};
pub use crate::pipeline::publish::{ArtifactCopy, ArtifactPublishingConfig, GitConfig};
pub use crate::pipeline::stage::{Stage, StageRole};
pub use crate::pipeline::steps::{ParamValue, Step, StepArgs};

// Re-export the rendering entry points and their collaborators
pub use crate::platform::{ExecutionPlatform, FixedPlatform, HostPlatform};
pub use crate::registry::{BuiltinRegistry, FieldType, StepKind, StepRegistry};
pub use crate::render::{RenderContext, SnippetRenderer};
