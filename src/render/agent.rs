//! Agent block rendering

use super::SnippetRenderer;
use crate::pipeline::agent::{Agent, AgentKind};
use crate::text::{add_tabs, single_quoted};

impl SnippetRenderer<'_> {
    /// Renders the body of an `agent` section.
    ///
    /// `None` renders the `any` sentinel. Absent optional fields are
    /// omitted; there are no error paths. Common options always follow
    /// the variant-specific lines, in fixed order: label, custom
    /// workspace, node reuse (containerized variants only).
    #[allow(clippy::unused_self, clippy::format_push_string)]
    #[must_use]
    pub fn render_agent(&self, agent: Option<&Agent>) -> String {
        let Some(agent) = agent else {
            return "any\n".to_string();
        };

        match &agent.kind {
            AgentKind::Sentinel(sentinel) => format!("{sentinel}\n"),
            AgentKind::Image(spec) => {
                let mut snippet = String::from("{\n\tdocker {\n");
                snippet.push_str(&format!("\t\timage {}\n", single_quoted(&spec.image)));
                if let Some(args) = &spec.args {
                    snippet.push_str(&format!("\t\targs {}\n", single_quoted(args)));
                }
                snippet.push_str(&format!("\t\talwaysPull {}\n", spec.always_pull));
                snippet.push_str("\t\t");
                snippet.push_str(&add_tabs(&common_options(agent), 2));
                snippet.push_str("\t}\n");
                snippet.push_str("}\n");
                snippet
            }
            AgentKind::BuildFile(spec) => {
                let mut snippet = String::from("{\n\tdockerfile {\n");
                snippet.push_str(&format!("\t\tfilename {}\n", single_quoted(&spec.filename)));
                if let Some(dir) = &spec.dir {
                    snippet.push_str(&format!("\t\tdir {}\n", single_quoted(dir)));
                }
                if let Some(args) = &spec.additional_build_args {
                    snippet.push_str(&format!("\t\tadditionalBuildArgs {}\n", single_quoted(args)));
                }
                snippet.push_str("\t\t");
                snippet.push_str(&add_tabs(&common_options(agent), 2));
                snippet.push_str("\t}\n");
                snippet.push_str("}\n");
                snippet
            }
            AgentKind::Node => {
                let mut snippet = String::from("{\n\tnode{\n");
                snippet.push_str("\t\t");
                snippet.push_str(&add_tabs(&common_options(agent), 2));
                snippet.push_str("\t}\n");
                snippet.push_str("}\n");
                snippet
            }
        }
    }
}

/// Options shared by all agent variants, in fixed order.
#[allow(clippy::format_push_string)]
fn common_options(agent: &Agent) -> String {
    let mut snippet = String::new();

    if let Some(label) = &agent.label {
        snippet.push_str(&format!("label {}\n", single_quoted(label)));
    }

    if let Some(workspace) = &agent.custom_workspace {
        snippet.push_str(&format!("customWorkspace {}\n", single_quoted(workspace)));
    }

    if agent.is_containerized() {
        snippet.push_str(&format!("reuseNode {}\n", agent.reuse_node));
    }

    snippet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::agent::{BuildFileSpec, ImageSpec};
    use crate::platform::FixedPlatform;
    use crate::registry::BuiltinRegistry;
    use pretty_assertions::assert_eq;

    fn renderer_fixture(platform: &FixedPlatform) -> SnippetRenderer<'_> {
        SnippetRenderer::new(BuiltinRegistry::standard(), platform)
    }

    #[test]
    fn test_absent_agent_renders_any() {
        let platform = FixedPlatform::unix();
        let renderer = renderer_fixture(&platform);
        assert_eq!(renderer.render_agent(None), "any\n");
    }

    #[test]
    fn test_sentinel_agent_rendered_verbatim() {
        let platform = FixedPlatform::unix();
        let renderer = renderer_fixture(&platform);
        assert_eq!(renderer.render_agent(Some(&Agent::any())), "any\n");
        assert_eq!(renderer.render_agent(Some(&Agent::none())), "none\n");
    }

    #[test]
    fn test_image_agent_block() {
        let platform = FixedPlatform::unix();
        let renderer = renderer_fixture(&platform);
        let agent = Agent::image("maven:3");

        assert_eq!(
            renderer.render_agent(Some(&agent)),
            "{\n\
             \tdocker {\n\
             \t\timage 'maven:3'\n\
             \t\talwaysPull false\n\
             \t\treuseNode false\n\
             \t}\n\
             }\n"
        );
    }

    #[test]
    fn test_image_agent_with_args_and_options() {
        let platform = FixedPlatform::unix();
        let renderer = renderer_fixture(&platform);
        let agent = Agent::new(AgentKind::Image(ImageSpec {
            image: "rust:1.92".to_string(),
            args: Some("-v /cache:/cache".to_string()),
            always_pull: true,
        }))
        .with_label("docker")
        .with_reuse_node(true);

        assert_eq!(
            renderer.render_agent(Some(&agent)),
            "{\n\
             \tdocker {\n\
             \t\timage 'rust:1.92'\n\
             \t\targs '-v /cache:/cache'\n\
             \t\talwaysPull true\n\
             \t\tlabel 'docker'\n\
             \t\treuseNode true\n\
             \t}\n\
             }\n"
        );
    }

    #[test]
    fn test_build_file_agent_block() {
        let platform = FixedPlatform::unix();
        let renderer = renderer_fixture(&platform);
        let agent = Agent::new(AgentKind::BuildFile(BuildFileSpec {
            filename: "Dockerfile.ci".to_string(),
            dir: Some("docker".to_string()),
            additional_build_args: Some("--build-arg RUST=1.92".to_string()),
        }));

        assert_eq!(
            renderer.render_agent(Some(&agent)),
            "{\n\
             \tdockerfile {\n\
             \t\tfilename 'Dockerfile.ci'\n\
             \t\tdir 'docker'\n\
             \t\tadditionalBuildArgs '--build-arg RUST=1.92'\n\
             \t\treuseNode false\n\
             \t}\n\
             }\n"
        );
    }

    #[test]
    fn test_node_agent_with_label() {
        let platform = FixedPlatform::unix();
        let renderer = renderer_fixture(&platform);
        let agent = Agent::node().with_label("linux");

        // No reuseNode line: the agent is not containerized.
        assert_eq!(
            renderer.render_agent(Some(&agent)),
            "{\n\
             \tnode{\n\
             \t\tlabel 'linux'\n\
             \t}\n\
             }\n"
        );
    }

    #[test]
    fn test_bare_node_agent_keeps_legacy_splice_residue() {
        let platform = FixedPlatform::unix();
        let renderer = renderer_fixture(&platform);

        // An empty option list leaves the splice indentation on the
        // closing line; downstream consumers diff against this text.
        assert_eq!(
            renderer.render_agent(Some(&Agent::node())),
            "{\n\
             \tnode{\n\
             \t\t\t}\n\
             }\n"
        );
    }

    #[test]
    fn test_exactly_one_variant_keyword_per_agent() {
        let platform = FixedPlatform::unix();
        let renderer = renderer_fixture(&platform);
        let agents = [
            Agent::image("maven:3"),
            Agent::build_file("Dockerfile"),
            Agent::node().with_label("linux"),
        ];

        for agent in &agents {
            let rendered = renderer.render_agent(Some(agent));
            let keywords = ["docker {", "dockerfile {", "node{"]
                .iter()
                .filter(|keyword| rendered.contains(**keyword))
                .count();
            assert_eq!(keywords, 1, "agent {agent} rendered {rendered}");
        }
    }

    #[test]
    fn test_common_options_appear_iff_set() {
        let platform = FixedPlatform::unix();
        let renderer = renderer_fixture(&platform);

        let bare = renderer.render_agent(Some(&Agent::image("maven:3")));
        assert!(!bare.contains("label"));
        assert!(!bare.contains("customWorkspace"));

        let configured = renderer.render_agent(Some(
            &Agent::image("maven:3")
                .with_label("docker")
                .with_custom_workspace("/ws"),
        ));
        assert!(configured.contains("label 'docker'"));
        assert!(configured.contains("customWorkspace '/ws'"));
    }
}
