//! Text rendering for generated files.
//! Generated documents are MiniJinja templates filled from a JSON context.
use crate::error::{Error, Result};
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that keeps the trailing newline of its templates,
    /// so generated files end the way their template does.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template cannot be parsed or rendered
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        self.env.render_str(template, context).map_err(Error::MinijinjaError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minijinja_renderer() {
        let engine = MiniJinjaRenderer::new();
        let context = serde_json::json!({ "name": "demo", "typed": true });

        let result = engine.render("Hello {{ name }}!", &context).unwrap();
        assert_eq!(result, "Hello demo!");

        let result = engine.render("{% if typed %}ts{% else %}js{% endif %}\n", &context).unwrap();
        assert_eq!(result, "ts\n");
    }

    #[test]
    fn test_minijinja_renderer_syntax_error() {
        let engine = MiniJinjaRenderer::new();
        let result = engine.render("{% if %}", &serde_json::json!({}));
        assert!(matches!(result, Err(Error::MinijinjaError(_))));
    }
}
