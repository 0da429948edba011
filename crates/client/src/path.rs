//! Logical component paths.

use std::fmt;
use std::sync::Arc;

/// Logical path of a component, e.g. `catalog/filter/supplier`.
///
/// The path names the component's place in the configuration tree
/// (`client/html/<path>/...`) and doubles as its registry key. Cheap to
/// clone and hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientPath(Arc<str>);

impl ClientPath {
    pub fn new(path: impl AsRef<str>) -> Self {
        Self(Arc::from(path.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Configuration key under this component's prefix, e.g.
    /// `client/html/catalog/filter/subparts` for `subparts`.
    pub fn config_key(&self, suffix: &str) -> String {
        format!("client/html/{}/{}", self.0, suffix)
    }

    /// CSS class form of the path (`catalog-filter-supplier`).
    pub fn css_class(&self) -> String {
        self.0.replace('/', "-")
    }
}

impl fmt::Display for ClientPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClientPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for ClientPath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}
