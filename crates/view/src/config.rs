//! JSON-backed configuration with slash-separated key lookup.
//!
//! Keys mirror the component tree, e.g.
//! `client/html/catalog/filter/subparts` or
//! `client/html/email/payment/pdf/status`. Lookup walks the JSON tree with
//! a pointer; absent scalar keys fall back to the caller's default, while a
//! present but malformed list is a hard configuration error.

use serde_json::Value;
use thiserror::Error;

/// Errors for configuration values that exist but have the wrong shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Config key '{key}' must be an array of strings")]
    ExpectedStringList { key: String },
}

/// Read-only configuration tree.
#[derive(Debug, Clone, Default)]
pub struct Config {
    root: Value,
}

impl Config {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Raw value at a slash-separated key, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let pointer = format!("/{}", key.trim_matches('/'));
        self.root.pointer(&pointer)
    }

    /// String value, or `default` when the key is absent or not a string.
    pub fn string_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).and_then(Value::as_str).unwrap_or(default)
    }

    /// Integer value, or `default` when the key is absent or not a number.
    pub fn int_or(&self, key: &str, default: i64) -> i64 {
        self.get(key).and_then(Value::as_i64).unwrap_or(default)
    }

    /// Boolean value, or `default` when the key is absent or not a bool.
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    /// List of strings under `key`.
    ///
    /// An absent key is an empty list; a present value that is not an array
    /// of strings is a configuration error.
    pub fn string_list(&self, key: &str) -> Result<Vec<String>, ConfigError> {
        match self.get(key) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        ConfigError::ExpectedStringList { key: key.to_string() }
                    })
                })
                .collect(),
            Some(_) => Err(ConfigError::ExpectedStringList { key: key.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Config {
        Config::new(json!({
            "client": {
                "html": {
                    "catalog": {
                        "filter": {
                            "subparts": ["catalog/filter/search", "catalog/filter/tree"],
                            "name": "Compact",
                        }
                    },
                    "email": {
                        "payment": {
                            "pdf": { "status": 4, "subparts": "oops" }
                        }
                    }
                }
            }
        }))
    }

    #[test]
    fn test_slash_key_lookup() {
        let config = sample();
        assert_eq!(
            config.string_or("client/html/catalog/filter/name", "Standard"),
            "Compact"
        );
        assert_eq!(config.int_or("client/html/email/payment/pdf/status", 5), 4);
    }

    #[test]
    fn test_absent_keys_default() {
        let config = sample();
        assert_eq!(config.string_or("client/html/basket/mini/name", "Standard"), "Standard");
        assert_eq!(config.int_or("client/html/basket/mini/size", 3), 3);
        assert!(config.bool_or("client/html/basket/mini/open", true));
        assert_eq!(config.string_list("client/html/basket/mini/subparts").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_string_list_reads_arrays() {
        let config = sample();
        assert_eq!(
            config.string_list("client/html/catalog/filter/subparts").unwrap(),
            vec!["catalog/filter/search".to_string(), "catalog/filter/tree".to_string()]
        );
    }

    #[test]
    fn test_malformed_list_is_an_error() {
        let config = sample();
        assert_eq!(
            config.string_list("client/html/email/payment/pdf/subparts"),
            Err(ConfigError::ExpectedStringList {
                key: "client/html/email/payment/pdf/subparts".to_string()
            })
        );

        let mixed = Config::new(json!({ "list": ["ok", 7] }));
        assert!(mixed.string_list("list").is_err());
    }
}
