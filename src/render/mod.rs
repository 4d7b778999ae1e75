//! Snippet rendering core
//!
//! [`SnippetRenderer`] turns pipeline model values into declarative
//! pipeline script fragments. Every method is a pure text producer: no
//! I/O, no retained state, no partial output on error paths. The caller
//! concatenates the fragments into the final script.

mod agent;
mod post;
mod publish;
mod stage;
mod step;

use crate::pipeline::publish::GitConfig;
use crate::platform::ExecutionPlatform;
use crate::registry::StepRegistry;

/// Caller-supplied pipeline metadata shared by every stage render
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Build report paths published after a successful `Build` stage
    pub build_report_paths: Option<Vec<String>>,

    /// Test report paths published after a successful `Tests` stage
    pub test_report_paths: Option<Vec<String>>,

    /// Additional artifact globs archived after a successful `Build` stage
    pub archive_artifacts: Option<Vec<String>>,

    /// Git remote for the currently disabled post-push action; its URL
    /// still gates `Tests` post emission
    pub git: Option<GitConfig>,

    /// Static-analysis result pattern for the `Tests` stage
    pub static_analysis_pattern: Option<String>,
}

impl RenderContext {
    /// Creates a context with no metadata set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the build report paths.
    #[must_use]
    pub fn with_build_report_paths(mut self, paths: Vec<String>) -> Self {
        self.build_report_paths = Some(paths);
        self
    }

    /// Sets the test report paths.
    #[must_use]
    pub fn with_test_report_paths(mut self, paths: Vec<String>) -> Self {
        self.test_report_paths = Some(paths);
        self
    }

    /// Sets the additional artifact globs.
    #[must_use]
    pub fn with_archive_artifacts(mut self, globs: Vec<String>) -> Self {
        self.archive_artifacts = Some(globs);
        self
    }

    /// Sets the git remote configuration.
    #[must_use]
    pub fn with_git(mut self, git: GitConfig) -> Self {
        self.git = Some(git);
        self
    }

    /// Sets the static-analysis pattern.
    #[must_use]
    pub fn with_static_analysis_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.static_analysis_pattern = Some(pattern.into());
        self
    }

    pub(crate) fn git_url(&self) -> Option<&str> {
        self.git.as_ref().and_then(|git| git.git_url.as_deref())
    }
}

/// Renders pipeline model values to pipeline script text.
///
/// Holds borrowed capabilities only; every render call is stateless and
/// synchronous, so one renderer may serve concurrent renders of
/// independent pipelines.
pub struct SnippetRenderer<'a> {
    registry: &'a dyn StepRegistry,
    platform: &'a dyn ExecutionPlatform,
}

impl<'a> SnippetRenderer<'a> {
    /// Creates a renderer over the given registry and platform.
    #[must_use]
    pub fn new(registry: &'a dyn StepRegistry, platform: &'a dyn ExecutionPlatform) -> Self {
        Self { registry, platform }
    }

    pub(crate) fn registry(&self) -> &dyn StepRegistry {
        self.registry
    }

    /// OS family of the target execution platform.
    #[must_use]
    pub fn is_unix(&self) -> bool {
        self.platform.is_unix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FixedPlatform;
    use crate::registry::BuiltinRegistry;

    #[test]
    fn test_renderer_reports_platform() {
        let unix = FixedPlatform::unix();
        let windows = FixedPlatform::windows();

        let renderer = SnippetRenderer::new(BuiltinRegistry::standard(), &unix);
        assert!(renderer.is_unix());

        let renderer = SnippetRenderer::new(BuiltinRegistry::standard(), &windows);
        assert!(!renderer.is_unix());
    }

    #[test]
    fn test_context_git_url() {
        let context = RenderContext::new();
        assert!(context.git_url().is_none());

        let context = RenderContext::new().with_git(GitConfig::new());
        assert!(context.git_url().is_none());

        let context = RenderContext::new()
            .with_git(GitConfig::new().with_git_url("https://example.com/repo.git"));
        assert_eq!(context.git_url(), Some("https://example.com/repo.git"));
    }
}
