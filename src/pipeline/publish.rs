//! Artifact publishing and git configuration
//!
//! Models for the dedicated publishing stage and the git remote consumed
//! by the (currently disabled) post-push action.

use super::Validate;
use super::errors::ValidationError;
use serde::{Deserialize, Serialize};

/// Remote target and credential for the artifact publishing stage.
///
/// Absent config means the publishing stage is omitted entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactPublishingConfig {
    /// Identifier of a file-type credential holding the transfer key
    pub credentials_id: String,

    /// User on the remote host
    pub user: String,

    /// Remote host receiving the artifacts
    pub host: String,
}

impl ArtifactPublishingConfig {
    /// Creates a publishing config.
    #[must_use]
    pub fn new(
        credentials_id: impl Into<String>,
        user: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            credentials_id: credentials_id.into(),
            user: user.into(),
            host: host.into(),
        }
    }
}

impl Validate for ArtifactPublishingConfig {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.credentials_id.is_empty() {
            return Err(ValidationError::MissingPublishingField {
                field: "credentials_id",
            });
        }
        if self.user.is_empty() {
            return Err(ValidationError::MissingPublishingField { field: "user" });
        }
        if self.host.is_empty() {
            return Err(ValidationError::MissingPublishingField { field: "host" });
        }
        Ok(())
    }
}

/// One file to publish: local path and remote destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactCopy {
    /// Local path of the artifact
    pub from: String,

    /// Destination path on the remote host
    pub to: String,
}

impl ArtifactCopy {
    /// Creates a copy entry.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Git remote configuration.
///
/// Consumed by the Tests-stage post emission gate and by the disabled
/// post-push action; retained as an interface point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GitConfig {
    /// Credential used to push
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials_id: Option<String>,

    /// Remote repository URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_url: Option<String>,

    /// Branch pushed to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_branch: Option<String>,
}

impl GitConfig {
    /// Creates an empty git configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the credential id.
    #[must_use]
    pub fn with_credentials_id(mut self, id: impl Into<String>) -> Self {
        self.credentials_id = Some(id.into());
        self
    }

    /// Sets the remote URL.
    #[must_use]
    pub fn with_git_url(mut self, url: impl Into<String>) -> Self {
        self.git_url = Some(url.into());
        self
    }

    /// Sets the branch.
    #[must_use]
    pub fn with_git_branch(mut self, branch: impl Into<String>) -> Self {
        self.git_branch = Some(branch.into());
        self
    }
}
