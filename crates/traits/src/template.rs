//! TemplateEngine trait for abstracting markup rendering.
//!
//! The core never interprets template syntax itself; it hands a template
//! path and a JSON data tree to an engine and receives the final HTML
//! string. Which syntax the engine speaks (Handlebars in the shipped
//! implementation) is invisible to components.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Debug;
use thiserror::Error;

/// Error type for template rendering operations.
#[derive(Error, Debug, Clone)]
pub enum TemplateError {
    /// The template path was never registered. A missing template is a
    /// deployment defect, not a runtime condition to paper over.
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Template '{path}' failed to render: {message}")]
    RenderFailed { path: String, message: String },

    #[error("Invalid template source '{path}': {message}")]
    InvalidSource { path: String, message: String },
}

/// A trait for rendering registered templates against JSON data.
///
/// Template paths are logical names such as `catalog/filter/body`; the
/// data tree carries the component's view slots plus the committed blocks
/// under the `_blocks` key.
pub trait TemplateEngine: Send + Sync + Debug {
    /// Renders the template registered under `path` with `data`.
    fn render(&self, path: &str, data: &Value) -> Result<String, TemplateError>;

    /// Returns `true` if a template is registered under `path`.
    fn has_template(&self, path: &str) -> bool;

    /// Returns a human-readable name for this engine (for logging).
    fn name(&self) -> &'static str;
}

/// A fixed-output engine: every registered path maps to a literal string
/// that is returned verbatim, ignoring the data tree.
///
/// Useful in tests and in setups where the markup needs no interpolation.
#[derive(Debug, Default)]
pub struct StaticTemplates {
    templates: HashMap<String, String>,
}

impl StaticTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `source` as the verbatim output for `path`.
    pub fn insert(&mut self, path: impl Into<String>, source: impl Into<String>) {
        self.templates.insert(path.into(), source.into());
    }

    /// Builder-style variant of [`StaticTemplates::insert`].
    pub fn with(mut self, path: impl Into<String>, source: impl Into<String>) -> Self {
        self.insert(path, source);
        self
    }
}

impl TemplateEngine for StaticTemplates {
    fn render(&self, path: &str, _data: &Value) -> Result<String, TemplateError> {
        self.templates
            .get(path)
            .cloned()
            .ok_or_else(|| TemplateError::UnknownTemplate(path.to_string()))
    }

    fn has_template(&self, path: &str) -> bool {
        self.templates.contains_key(path)
    }

    fn name(&self) -> &'static str {
        "StaticTemplates"
    }
}
