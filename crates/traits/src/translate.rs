//! Translator trait for localization lookup.

use std::collections::HashMap;
use std::fmt::Debug;

/// A trait for looking up translated strings.
///
/// `domain` groups related texts (`"client"`, `"client/email"`, ...); the
/// source text doubles as the lookup key. A missing entry returns the
/// source text unchanged, so untranslated setups degrade to the original
/// wording instead of failing.
pub trait Translator: Send + Sync + Debug {
    /// Returns the translation of `text` within `domain`.
    fn translate(&self, domain: &str, text: &str) -> String;
}

/// An in-memory translator backed by a `(domain, text) -> translation` map.
///
/// The default (empty) instance acts as a passthrough.
#[derive(Debug, Default)]
pub struct MapTranslator {
    entries: HashMap<(String, String), String>,
}

impl MapTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a translation entry.
    pub fn insert(
        &mut self,
        domain: impl Into<String>,
        text: impl Into<String>,
        translation: impl Into<String>,
    ) {
        self.entries
            .insert((domain.into(), text.into()), translation.into());
    }

    /// Builder-style variant of [`MapTranslator::insert`].
    pub fn with(
        mut self,
        domain: impl Into<String>,
        text: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.insert(domain, text, translation);
        self
    }
}

impl Translator for MapTranslator {
    fn translate(&self, domain: &str, text: &str) -> String {
        self.entries
            .get(&(domain.to_string(), text.to_string()))
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_translator_lookup() {
        let translator = MapTranslator::new().with("client", "Suppliers", "Anbieter");

        assert_eq!(translator.translate("client", "Suppliers"), "Anbieter");
    }

    #[test]
    fn test_map_translator_falls_back_to_source_text() {
        let translator = MapTranslator::new();
        assert_eq!(translator.translate("client", "Suppliers"), "Suppliers");
    }

    #[test]
    fn test_map_translator_domains_are_separate() {
        let translator = MapTranslator::new().with("client", "Order", "Bestellung");

        assert_eq!(translator.translate("client", "Order"), "Bestellung");
        assert_eq!(translator.translate("client/email", "Order"), "Order");
    }
}
