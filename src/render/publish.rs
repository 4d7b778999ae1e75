//! Artifact publishing stage rendering

use super::SnippetRenderer;
use crate::pipeline::publish::{ArtifactCopy, ArtifactPublishingConfig};
use crate::text::single_quoted;

impl SnippetRenderer<'_> {
    /// Renders the dedicated `Publish Artifact` stage, or an empty string
    /// when no publishing config is present.
    ///
    /// Every entry becomes one secure-copy invocation inside a single
    /// credential-binding block, in input order. The credential file is
    /// bound to the `FILE` variable for the duration of the block.
    #[allow(clippy::unused_self, clippy::format_push_string)]
    #[must_use]
    pub fn render_publish_artifact_stage(
        &self,
        config: Option<&ArtifactPublishingConfig>,
        artifacts: &[ArtifactCopy],
    ) -> String {
        let Some(config) = config else {
            return String::new();
        };

        let mut snippet = String::from("stage('Publish Artifact') {\n");
        snippet.push_str("\tsteps {\n");
        snippet.push_str(&format!(
            "\t\twithCredentials([file(credentialsId: {}, variable: 'FILE')]) {{\n",
            single_quoted(&config.credentials_id)
        ));

        for artifact in artifacts {
            snippet.push_str(&format!(
                "\t\t\tsh 'scp -i $FILE {} {}@{}:{}'\n",
                artifact.from, config.user, config.host, artifact.to
            ));
        }

        snippet.push_str("\t\t}\n");
        snippet.push_str("\t}\n");
        snippet.push_str("}\n");
        snippet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FixedPlatform;
    use crate::registry::BuiltinRegistry;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_absent_config_renders_nothing() {
        let platform = FixedPlatform::unix();
        let renderer = SnippetRenderer::new(BuiltinRegistry::standard(), &platform);
        let artifacts = vec![ArtifactCopy::new("a.jar", "/opt/a.jar")];

        assert_eq!(renderer.render_publish_artifact_stage(None, &artifacts), "");
    }

    #[test]
    fn test_single_entry_stage() {
        let platform = FixedPlatform::unix();
        let renderer = SnippetRenderer::new(BuiltinRegistry::standard(), &platform);
        let config = ArtifactPublishingConfig::new("ssh-key", "deploy", "artifacts.example.com");
        let artifacts = vec![ArtifactCopy::new("a.jar", "/opt/a.jar")];

        assert_eq!(
            renderer.render_publish_artifact_stage(Some(&config), &artifacts),
            "stage('Publish Artifact') {\n\
             \tsteps {\n\
             \t\twithCredentials([file(credentialsId: 'ssh-key', variable: 'FILE')]) {\n\
             \t\t\tsh 'scp -i $FILE a.jar deploy@artifacts.example.com:/opt/a.jar'\n\
             \t\t}\n\
             \t}\n\
             }\n"
        );
    }

    #[test]
    fn test_entries_keep_input_order_in_one_credential_block() {
        let platform = FixedPlatform::unix();
        let renderer = SnippetRenderer::new(BuiltinRegistry::standard(), &platform);
        let config = ArtifactPublishingConfig::new("ssh-key", "deploy", "example.com");
        let artifacts = vec![
            ArtifactCopy::new("a.jar", "/opt/a.jar"),
            ArtifactCopy::new("b.jar", "/opt/b.jar"),
        ];

        let rendered = renderer.render_publish_artifact_stage(Some(&config), &artifacts);

        assert_eq!(rendered.matches("withCredentials").count(), 1);
        assert_eq!(rendered.matches("scp -i $FILE").count(), 2);
        let first = rendered.find("a.jar").unwrap();
        let second = rendered.find("b.jar").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_empty_entry_list_still_scopes_credential() {
        let platform = FixedPlatform::unix();
        let renderer = SnippetRenderer::new(BuiltinRegistry::standard(), &platform);
        let config = ArtifactPublishingConfig::new("ssh-key", "deploy", "example.com");

        let rendered = renderer.render_publish_artifact_stage(Some(&config), &[]);
        assert!(rendered.contains("withCredentials"));
        assert!(!rendered.contains("scp"));
    }
}
