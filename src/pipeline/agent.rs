//! Agent specification types
//!
//! An agent describes the execution environment for a pipeline or stage:
//! a sentinel (`any`/`none`), a container image, a container build file,
//! or a plain node.

use super::Validate;
use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel agents that carry no configuration of their own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentSentinel {
    /// Run on any available node
    Any,

    /// No global agent; stages declare their own
    None,
}

impl fmt::Display for AgentSentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Configuration for a container-image agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ImageSpec {
    /// Container image to run the stage in
    pub image: String,

    /// Arguments passed to the container runtime
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,

    /// Whether to pull the image on every run
    #[serde(default)]
    pub always_pull: bool,
}

impl Validate for ImageSpec {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.image.is_empty() {
            return Err(ValidationError::InvalidAgent(
                "container image cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration for an agent built from a container build file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BuildFileSpec {
    /// Path of the build file, relative to the workspace
    pub filename: String,

    /// Directory the image build runs in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,

    /// Extra arguments forwarded to the image build
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_build_args: Option<String>,
}

impl Validate for BuildFileSpec {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.filename.is_empty() {
            return Err(ValidationError::InvalidAgent(
                "build file name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// The mutually exclusive agent variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    /// `any`/`none` sentinel, emitted verbatim
    Sentinel(AgentSentinel),

    /// Container-image agent
    Image(ImageSpec),

    /// Container build-file agent
    BuildFile(BuildFileSpec),

    /// Plain node agent
    Node,
}

/// Execution-environment specification for a pipeline or stage.
///
/// Exactly one [`AgentKind`] variant is active per instance. Label, custom
/// workspace and node reuse are orthogonal options valid for any variant;
/// node reuse is only rendered for containerized kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Active agent variant
    pub kind: AgentKind,

    /// Node label selector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Custom workspace path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_workspace: Option<String>,

    /// Reuse the workspace node for containerized agents
    #[serde(default)]
    pub reuse_node: bool,
}

impl Agent {
    /// Creates an agent of the given kind with no common options.
    #[must_use]
    pub fn new(kind: AgentKind) -> Self {
        Self {
            kind,
            label: None,
            custom_workspace: None,
            reuse_node: false,
        }
    }

    /// Creates the `any` sentinel agent.
    #[must_use]
    pub fn any() -> Self {
        Self::new(AgentKind::Sentinel(AgentSentinel::Any))
    }

    /// Creates the `none` sentinel agent.
    #[must_use]
    pub fn none() -> Self {
        Self::new(AgentKind::Sentinel(AgentSentinel::None))
    }

    /// Creates a plain node agent.
    #[must_use]
    pub fn node() -> Self {
        Self::new(AgentKind::Node)
    }

    /// Creates a container-image agent.
    #[must_use]
    pub fn image(image: impl Into<String>) -> Self {
        Self::new(AgentKind::Image(ImageSpec {
            image: image.into(),
            ..Default::default()
        }))
    }

    /// Creates a build-file agent.
    #[must_use]
    pub fn build_file(filename: impl Into<String>) -> Self {
        Self::new(AgentKind::BuildFile(BuildFileSpec {
            filename: filename.into(),
            ..Default::default()
        }))
    }

    /// Sets the node label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the custom workspace path.
    #[must_use]
    pub fn with_custom_workspace(mut self, path: impl Into<String>) -> Self {
        self.custom_workspace = Some(path.into());
        self
    }

    /// Sets the reuse-node flag.
    #[must_use]
    pub fn with_reuse_node(mut self, reuse: bool) -> Self {
        self.reuse_node = reuse;
        self
    }

    /// True for container-image and build-file agents.
    #[must_use]
    pub fn is_containerized(&self) -> bool {
        matches!(self.kind, AgentKind::Image(_) | AgentKind::BuildFile(_))
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AgentKind::Sentinel(sentinel) => write!(f, "{sentinel}"),
            AgentKind::Image(spec) => write!(f, "image:{}", spec.image),
            AgentKind::BuildFile(spec) => write!(f, "buildfile:{}", spec.filename),
            AgentKind::Node => write!(f, "node"),
        }
    }
}

impl Validate for Agent {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        if let Some(label) = &self.label {
            if label.is_empty() {
                return Err(ValidationError::InvalidAgent(
                    "label cannot be empty".to_string(),
                ));
            }
        }
        match &self.kind {
            AgentKind::Sentinel(_) | AgentKind::Node => Ok(()),
            AgentKind::Image(spec) => spec.validate(),
            AgentKind::BuildFile(spec) => spec.validate(),
        }
    }
}
