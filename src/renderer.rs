//! Template renderer used for file contents and destination paths.
//!
//! Only `{{ name }}` and `{{ name | filter }}` expressions whose `name` is a
//! key of the context are rendered. Every other `{{ ... }}` or `{% ... %}`
//! sequence belongs to the template's own framework (Vue mustaches, JS
//! template literals, CSS) and is kept byte for byte.
use crate::error::{Error, Result};
use minijinja::Environment;
use regex::Regex;
use std::sync::LazyLock;

static VARIABLE_EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)((?:\s*\|\s*[A-Za-z_][A-Za-z0-9_]*)*)\s*\}\}")
        .expect("a valid regex pattern")
});

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Substitutes the context variables found in a template string.
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
    /// Creates a renderer with the case conversion filters registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.add_filter("snake_case", |value: String| cruet::to_snake_case(&value));
        env.add_filter("kebab_case", |value: String| cruet::to_kebab_case(&value));
        env.add_filter("camel_case", |value: String| cruet::to_camel_case(&value));
        env.add_filter("pascal_case", |value: String| cruet::to_pascal_case(&value));
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders each known variable expression with MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if a known variable is piped into an
    ///   unknown filter
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let is_known = |name: &str| context.as_object().is_some_and(|vars| vars.contains_key(name));

        let mut rendered = String::with_capacity(template.len());
        let mut last = 0;
        for captures in VARIABLE_EXPRESSION.captures_iter(template) {
            let (Some(expression), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            if !is_known(name.as_str()) {
                continue;
            }
            rendered.push_str(&template[last..expression.start()]);
            let value =
                self.env.render_str(expression.as_str(), context).map_err(Error::MinijinjaError)?;
            rendered.push_str(&value);
            last = expression.end();
        }
        rendered.push_str(&template[last..]);

        Ok(rendered)
    }
}
