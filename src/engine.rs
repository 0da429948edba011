//! Handlebars-backed template engine.

use std::fmt;

use handlebars::Handlebars;
use serde_json::Value;
use vitrine_traits::{TemplateEngine, TemplateError};

/// The standard [`TemplateEngine`] over a Handlebars registry.
///
/// Component templates are registered under their logical paths, e.g.
/// `catalog/filter/body`. Registering a path twice replaces the earlier
/// source, which is how deployments override a shipped template. Strict
/// mode stays off: a slot a template does not mention renders as empty
/// instead of failing the page.
pub struct HandlebarsEngine {
    registry: Handlebars<'static>,
}

impl HandlebarsEngine {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        Self { registry }
    }

    /// Registers (or overrides) the template source for `path`.
    pub fn register(&mut self, path: &str, source: &str) -> Result<(), TemplateError> {
        self.registry
            .register_template_string(path, source)
            .map_err(|e| TemplateError::InvalidSource {
                path: path.to_string(),
                message: e.to_string(),
            })
    }

    /// Builder-style variant of [`HandlebarsEngine::register`].
    pub fn with(mut self, path: &str, source: &str) -> Result<Self, TemplateError> {
        self.register(path, source)?;
        Ok(self)
    }
}

impl Default for HandlebarsEngine {
    fn default() -> Self {
        Self::new()
    }
}

// Handlebars has no Debug impl, so summarize instead of deriving.
impl fmt::Debug for HandlebarsEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlebarsEngine")
            .field("templates", &self.registry.get_templates().len())
            .finish()
    }
}

impl TemplateEngine for HandlebarsEngine {
    fn render(&self, path: &str, data: &Value) -> Result<String, TemplateError> {
        if !self.registry.has_template(path) {
            return Err(TemplateError::UnknownTemplate(path.to_string()));
        }
        self.registry
            .render(path, data)
            .map_err(|e| TemplateError::RenderFailed {
                path: path.to_string(),
                message: e.to_string(),
            })
    }

    fn has_template(&self, path: &str) -> bool {
        self.registry.has_template(path)
    }

    fn name(&self) -> &'static str {
        "handlebars"
    }
}
