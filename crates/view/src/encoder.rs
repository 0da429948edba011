//! Output escaping for markup assembled in component code.
//!
//! Templates escape their own interpolations; the encoder covers the places
//! where components build markup strings directly (block captures, attribute
//! values in prepared slots), using the same escaper the template layer
//! applies so both paths agree.

use handlebars::html_escape;

/// How far to trust a piece of text destined for HTML output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trust {
    /// Untrusted text; every HTML metacharacter is escaped.
    #[default]
    Untrusted,
    /// Markup produced by the system itself; emitted verbatim.
    Trusted,
}

/// Escapes text for HTML element and attribute contexts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder;

impl Encoder {
    /// Escapes `text` for an HTML element context according to `trust`.
    pub fn html(&self, text: &str, trust: Trust) -> String {
        match trust {
            Trust::Untrusted => html_escape(text),
            Trust::Trusted => text.to_string(),
        }
    }

    /// Escapes `text` for use inside a quoted HTML attribute value.
    pub fn attr(&self, text: &str) -> String {
        html_escape(text)
    }
}
