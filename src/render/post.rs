//! Post-action composition
//!
//! Builds the success/always/failure section of a stage. The well-known
//! `Build` and `Tests` stages receive implicit content: a default artifact
//! archive, caller-supplied report publishing and the static-analysis
//! directive.

use super::{RenderContext, SnippetRenderer};
use crate::pipeline::publish::GitConfig;
use crate::pipeline::stage::{Stage, StageRole};
use crate::text::{indent_block, single_quoted};

/// Artifact glob archived for every `Build` stage.
const DEFAULT_ARCHIVE_PATTERN: &str = "**/target/*.jar";

impl SnippetRenderer<'_> {
    /// Renders the `post { … }` section for a stage at stage nesting
    /// depth, or an empty string when no post section applies.
    ///
    /// Sub-blocks are emitted in fixed order: success, always, failure.
    #[allow(clippy::format_push_string)]
    #[must_use]
    pub fn render_post_actions(&self, stage: &Stage, context: &RenderContext) -> String {
        let role = stage.role();

        let build_defaults = role == StageRole::Build
            && (context.archive_artifacts.is_some()
                || context.build_report_paths.is_some()
                || context.static_analysis_pattern.is_some());
        let tests_defaults = role == StageRole::Tests
            && (context.test_report_paths.is_some() || context.git_url().is_some());

        if !stage.has_explicit_post() && !build_defaults && !tests_defaults {
            return String::new();
        }

        let mut snippet = String::from("\tpost {\n");

        if stage.success.is_some()
            || role == StageRole::Build
            || (role == StageRole::Tests && context.test_report_paths.is_some())
        {
            snippet.push_str("\t\tsuccess {\n");
            if role == StageRole::Build {
                snippet.push_str(&indent_block(
                    &format!(
                        "archiveArtifacts artifacts: {}\n",
                        single_quoted(DEFAULT_ARCHIVE_PATTERN)
                    ),
                    3,
                ));
                if let Some(globs) = &context.archive_artifacts {
                    snippet.push_str(&indent_block(&archive_artifacts_snippet(globs), 3));
                }
                if let Some(paths) = &context.build_report_paths {
                    snippet.push_str(&indent_block(&publish_report_snippet(paths), 3));
                }
            }
            if role == StageRole::Tests {
                if let Some(paths) = &context.test_report_paths {
                    snippet.push_str(&indent_block(&publish_report_snippet(paths), 3));
                }
                // git_push_snippet is spliced here once the downstream
                // gitPush step ships again; the git URL already gates the
                // surrounding post emission.
            }
            if let Some(scripts) = &stage.success {
                snippet.push_str(&indent_block(&self.render_shell_script(scripts), 3));
            }
            snippet.push_str("\t\t}\n");
        }

        if stage.always.is_some()
            || (context.static_analysis_pattern.is_some() && role == StageRole::Tests)
        {
            snippet.push_str("\t\talways {\n");
            if role == StageRole::Tests {
                if let Some(pattern) = &context.static_analysis_pattern {
                    snippet.push_str(&indent_block(
                        &format!("findbugs pattern: {}\n", single_quoted(pattern)),
                        3,
                    ));
                }
            }
            if let Some(scripts) = &stage.always {
                snippet.push_str(&indent_block(&self.render_shell_script(scripts), 3));
            }
            snippet.push_str("\t\t}\n");
        }

        if let Some(scripts) = &stage.failure {
            snippet.push_str("\t\tfailure {\n");
            snippet.push_str(&indent_block(&self.render_shell_script(scripts), 3));
            snippet.push_str("\t\t}\n");
        }

        snippet.push_str("\t}\n");
        snippet
    }

    /// Renders the runtime platform branch invoking each script path stem
    /// with `.sh` on Unix nodes and `.bat` elsewhere.
    ///
    /// Post-action script lists are raw path stems, so the platform choice
    /// is deferred to the node executing the script rather than resolved at
    /// generation time.
    #[allow(clippy::unused_self, clippy::format_push_string)]
    #[must_use]
    pub fn render_shell_script(&self, paths: &[String]) -> String {
        let mut snippet = String::from("script {\n\tif (isUnix()) {\n");
        for path in paths {
            snippet.push_str(&format!("\t\tsh {}\n", single_quoted(&format!("{path}.sh"))));
        }
        snippet.push_str("\t} else {\n");
        for path in paths {
            snippet.push_str(&format!("\t\tbat {}\n", single_quoted(&format!("{path}.bat"))));
        }
        snippet.push_str("\t}\n}\n");
        snippet
    }
}

/// One archive directive per artifact glob.
fn archive_artifacts_snippet(globs: &[String]) -> String {
    globs
        .iter()
        .map(|glob| format!("archiveArtifacts artifacts: {}\n", single_quoted(glob)))
        .collect()
}

/// One report-publish directive per result path.
fn publish_report_snippet(paths: &[String]) -> String {
    paths
        .iter()
        .map(|path| format!("junit {}\n", single_quoted(path)))
        .collect()
}

/// Success action pushing build results to the configured remote.
/// Disabled until the downstream gitPush step is available again.
#[allow(dead_code)]
fn git_push_snippet(git: &GitConfig) -> String {
    format!(
        "gitPush credentialId: \"{}\", url: \"{}\", branch: \"{}\"\n",
        git.credentials_id.as_deref().unwrap_or_default(),
        git.git_url.as_deref().unwrap_or_default(),
        git.git_branch.as_deref().unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::steps::Step;
    use crate::platform::FixedPlatform;
    use crate::registry::BuiltinRegistry;
    use crate::text::add_tabs;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn stage(name: &str) -> Stage {
        Stage::new(name, vec![Step::with_default("sh", "noop")])
    }

    #[test]
    fn test_shell_script_block() {
        let platform = FixedPlatform::unix();
        let renderer = SnippetRenderer::new(BuiltinRegistry::standard(), &platform);
        let paths = vec!["hello".to_string(), "bye".to_string()];

        assert_eq!(
            renderer.render_shell_script(&paths),
            "script {\n\
             \tif (isUnix()) {\n\
             \t\tsh 'hello.sh'\n\
             \t\tsh 'bye.sh'\n\
             \t} else {\n\
             \t\tbat 'hello.bat'\n\
             \t\tbat 'bye.bat'\n\
             \t}\n\
             }\n"
        );
    }

    #[test]
    fn test_no_post_section_for_plain_custom_stage() {
        let platform = FixedPlatform::unix();
        let renderer = SnippetRenderer::new(BuiltinRegistry::standard(), &platform);
        let rendered = renderer.render_post_actions(&stage("Deploy"), &RenderContext::new());
        assert_eq!(rendered, "");
    }

    #[test]
    fn test_no_post_section_for_build_stage_without_metadata() {
        // With no explicit lists and no metadata, the emission gate does
        // not pass even for the Build stage.
        let platform = FixedPlatform::unix();
        let renderer = SnippetRenderer::new(BuiltinRegistry::standard(), &platform);
        let rendered = renderer.render_post_actions(&stage("Build"), &RenderContext::new());
        assert_eq!(rendered, "");
    }

    #[test]
    fn test_build_stage_default_archive_once_gate_passes() {
        let platform = FixedPlatform::unix();
        let renderer = SnippetRenderer::new(BuiltinRegistry::standard(), &platform);
        let context = RenderContext::new().with_static_analysis_pattern("**/findbugs.xml");

        // The static-analysis pattern opens the gate, but only the Tests
        // stage renders the directive itself: the success block holds
        // exactly the default archive line.
        assert_eq!(
            renderer.render_post_actions(&stage("Build"), &context),
            "\tpost {\n\
             \t\tsuccess {\n\
             \t\t\tarchiveArtifacts artifacts: '**/target/*.jar'\n\
             \t\t}\n\
             \t}\n"
        );
    }

    #[test]
    fn test_build_stage_archives_and_reports() {
        let platform = FixedPlatform::unix();
        let renderer = SnippetRenderer::new(BuiltinRegistry::standard(), &platform);
        let context = RenderContext::new()
            .with_archive_artifacts(vec!["out/*.jar".to_string()])
            .with_build_report_paths(vec!["build-report.xml".to_string()]);

        assert_eq!(
            renderer.render_post_actions(&stage("Build"), &context),
            "\tpost {\n\
             \t\tsuccess {\n\
             \t\t\tarchiveArtifacts artifacts: '**/target/*.jar'\n\
             \t\t\tarchiveArtifacts artifacts: 'out/*.jar'\n\
             \t\t\tjunit 'build-report.xml'\n\
             \t\t}\n\
             \t}\n"
        );
    }

    #[test]
    fn test_tests_stage_publishes_reports() {
        let platform = FixedPlatform::unix();
        let renderer = SnippetRenderer::new(BuiltinRegistry::standard(), &platform);
        let context =
            RenderContext::new().with_test_report_paths(vec!["report1.xml".to_string()]);

        assert_eq!(
            renderer.render_post_actions(&stage("Tests"), &context),
            "\tpost {\n\
             \t\tsuccess {\n\
             \t\t\tjunit 'report1.xml'\n\
             \t\t}\n\
             \t}\n"
        );
    }

    #[test]
    fn test_tests_stage_static_analysis_in_always_block() {
        let platform = FixedPlatform::unix();
        let renderer = SnippetRenderer::new(BuiltinRegistry::standard(), &platform);
        let context = RenderContext::new()
            .with_test_report_paths(vec!["report.xml".to_string()])
            .with_static_analysis_pattern("**/findbugs.xml");

        assert_eq!(
            renderer.render_post_actions(&stage("Tests"), &context),
            "\tpost {\n\
             \t\tsuccess {\n\
             \t\t\tjunit 'report.xml'\n\
             \t\t}\n\
             \t\talways {\n\
             \t\t\tfindbugs pattern: '**/findbugs.xml'\n\
             \t\t}\n\
             \t}\n"
        );
    }

    #[test]
    fn test_static_analysis_ignored_outside_tests_stage_always() {
        let platform = FixedPlatform::unix();
        let renderer = SnippetRenderer::new(BuiltinRegistry::standard(), &platform);
        let context = RenderContext::new().with_static_analysis_pattern("**/findbugs.xml");

        let rendered = renderer.render_post_actions(&stage("Build"), &context);
        assert!(!rendered.contains("findbugs"));
    }

    #[test]
    fn test_explicit_scripts_render_in_fixed_order() {
        let platform = FixedPlatform::unix();
        let renderer = SnippetRenderer::new(BuiltinRegistry::standard(), &platform);
        let stage = stage("Deploy")
            .with_success(vec!["announce".to_string()])
            .with_always(vec!["cleanup".to_string()])
            .with_failure(vec!["alert".to_string()]);

        let rendered = renderer.render_post_actions(&stage, &RenderContext::new());

        let success = rendered.find("\t\tsuccess {").unwrap();
        let always = rendered.find("\t\talways {").unwrap();
        let failure = rendered.find("\t\tfailure {").unwrap();
        assert!(success < always && always < failure);

        assert!(rendered.contains("sh 'announce.sh'"));
        assert!(rendered.contains("bat 'cleanup.bat'"));
        assert!(rendered.contains("sh 'alert.sh'"));
    }

    #[test]
    fn test_failure_only_stage() {
        let platform = FixedPlatform::unix();
        let renderer = SnippetRenderer::new(BuiltinRegistry::standard(), &platform);
        let stage = stage("Deploy").with_failure(vec!["alert".to_string()]);

        assert_eq!(
            renderer.render_post_actions(&stage, &RenderContext::new()),
            "\tpost {\n\
             \t\tfailure {\n\
             \t\t\tscript {\n\
             \t\t\t\tif (isUnix()) {\n\
             \t\t\t\t\tsh 'alert.sh'\n\
             \t\t\t\t} else {\n\
             \t\t\t\t\tbat 'alert.bat'\n\
             \t\t\t\t}\n\
             \t\t\t}\n\
             \t\t}\n\
             \t}\n"
        );
    }

    #[test]
    fn test_git_url_opens_tests_gate_without_content() {
        // The git URL gates post emission for the Tests stage, but the
        // push action itself stays disabled: the success block is absent
        // without test reports or explicit scripts.
        let platform = FixedPlatform::unix();
        let renderer = SnippetRenderer::new(BuiltinRegistry::standard(), &platform);
        let context = RenderContext::new()
            .with_git(GitConfig::new().with_git_url("https://example.com/repo.git"));

        assert_eq!(
            renderer.render_post_actions(&stage("Tests"), &context),
            "\tpost {\n\t}\n"
        );
    }

    #[test]
    fn test_git_push_snippet_shape() {
        let git = GitConfig::new()
            .with_credentials_id("git-cred")
            .with_git_url("https://example.com/repo.git")
            .with_git_branch("main");

        assert_eq!(
            git_push_snippet(&git),
            "gitPush credentialId: \"git-cred\", url: \"https://example.com/repo.git\", branch: \"main\"\n"
        );
    }

    proptest! {
        #[test]
        fn prop_spliced_shell_script_keeps_one_line_per_stem_per_branch(
            stems in proptest::collection::hash_set("[a-z]{1,8}", 1..5),
        ) {
            let stems: Vec<String> = stems.into_iter().collect();
            let platform = FixedPlatform::unix();
            let renderer = SnippetRenderer::new(BuiltinRegistry::standard(), &platform);
            let spliced = add_tabs(&renderer.render_shell_script(&stems), 2);

            // script/if/else/two closers plus one invocation per stem per
            // platform branch.
            prop_assert_eq!(
                spliced.matches('\n').count(),
                5 + 2 * stems.len()
            );
            for stem in &stems {
                prop_assert_eq!(spliced.matches(&format!("sh '{stem}.sh'")).count(), 1);
                prop_assert_eq!(spliced.matches(&format!("bat '{stem}.bat'")).count(), 1);
            }
        }
    }
}
