//! LinkBuilder trait for shop URL generation.
//!
//! Components never concatenate URLs themselves; they name a logical
//! target (`catalog/list`, `basket/add`, ...) plus query parameters and
//! let the platform's link builder produce the final address.

use std::fmt::Debug;
use thiserror::Error;
use url::Url;

/// Error type for link-builder construction.
#[derive(Error, Debug, Clone)]
pub enum LinkError {
    #[error("Invalid base URL '{base}': {message}")]
    InvalidBase { base: String, message: String },
}

/// A trait for building absolute URLs to shop routes.
pub trait LinkBuilder: Send + Sync + Debug {
    /// Builds the URL for `target` with the given query parameters.
    ///
    /// Parameter values are percent-encoded by the implementation; callers
    /// pass them raw.
    fn link(&self, target: &str, params: &[(String, String)]) -> String;
}

/// A link builder joining a fixed absolute base URL with the target path.
///
/// `BaseUrlLinks::new("https://shop.example")` turns
/// `link("catalog/list", [("f_catid", "7")])` into
/// `https://shop.example/catalog/list?f_catid=7`.
#[derive(Debug, Clone)]
pub struct BaseUrlLinks {
    base: Url,
}

impl BaseUrlLinks {
    /// Creates a link builder for an absolute base URL.
    pub fn new(base: &str) -> Result<Self, LinkError> {
        // A trailing slash makes Url::join treat the last segment as a
        // directory instead of replacing it.
        let normalized = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };
        let base = Url::parse(&normalized).map_err(|e| LinkError::InvalidBase {
            base: normalized.clone(),
            message: e.to_string(),
        })?;
        Ok(Self { base })
    }

    /// Returns the configured base URL.
    pub fn base(&self) -> &str {
        self.base.as_str()
    }
}

impl LinkBuilder for BaseUrlLinks {
    fn link(&self, target: &str, params: &[(String, String)]) -> String {
        let mut url = match self.base.join(target.trim_start_matches('/')) {
            Ok(url) => url,
            // An unjoinable target cannot occur with a valid absolute base;
            // fall back to the base rather than emit a broken href.
            Err(_) => self.base.clone(),
        };
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_base_url_links_join() {
        let links = BaseUrlLinks::new("https://shop.example").unwrap();
        assert_eq!(
            links.link("catalog/list", &[]),
            "https://shop.example/catalog/list"
        );
    }

    #[test]
    fn test_base_url_links_query_params() {
        let links = BaseUrlLinks::new("https://shop.example/").unwrap();
        let url = links.link(
            "catalog/list",
            &[pair("f_catid", "7"), pair("f_name", "summer dresses")],
        );
        assert_eq!(
            url,
            "https://shop.example/catalog/list?f_catid=7&f_name=summer+dresses"
        );
    }

    #[test]
    fn test_base_url_links_nested_base_path() {
        let links = BaseUrlLinks::new("https://example.com/shop").unwrap();
        assert_eq!(
            links.link("catalog/detail", &[pair("d_prodid", "42")]),
            "https://example.com/shop/catalog/detail?d_prodid=42"
        );
    }

    #[test]
    fn test_base_url_links_rejects_relative_base() {
        let result = BaseUrlLinks::new("/shop");
        assert!(matches!(result, Err(LinkError::InvalidBase { .. })));
    }
}
