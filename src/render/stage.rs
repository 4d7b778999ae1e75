//! Stage block rendering

use super::{RenderContext, SnippetRenderer};
use crate::pipeline::errors::RenderError;
use crate::pipeline::stage::Stage;
use crate::text::{indent_block, single_quoted};

impl SnippetRenderer<'_> {
    /// Renders one full stage block: the resolved steps in list order,
    /// then the post section when one applies.
    ///
    /// # Errors
    ///
    /// Propagates the first step resolution failure; a stage with a
    /// failing step emits nothing.
    pub fn render_stage(
        &self,
        stage: &Stage,
        context: &RenderContext,
    ) -> Result<String, RenderError> {
        let mut body = String::new();
        for step in &stage.steps {
            body.push_str(&indent_block(&self.render_step(step)?, 2));
        }

        let mut snippet = format!("stage({}) {{\n", single_quoted(&stage.name));
        snippet.push_str("\tsteps {\n");
        snippet.push_str(&body);
        snippet.push_str("\t}\n");
        snippet.push_str(&self.render_post_actions(stage, context));
        snippet.push_str("}\n");
        Ok(snippet)
    }
}
