//! Cache metadata aggregated across a component tree.
//!
//! Every component contributes the tags of the data it displayed and the
//! earliest expiry of that data. The render driver threads one accumulator
//! through the whole tree, so the caller gets the union of all tags and the
//! minimum expiry for the produced page fragment. The surrounding HTTP
//! cache uses the tags for invalidation and the expiry as the lifetime cap.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

/// Cache tags and expiry collected during one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheMeta {
    tags: BTreeSet<String>,
    expires: Option<DateTime<Utc>>,
}

impl CacheMeta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one cache tag, e.g. `supplier-12`. Duplicates collapse.
    pub fn tag(&mut self, tag: impl Into<String>) {
        self.tags.insert(tag.into());
    }

    /// Records an expiry time, keeping the earliest one seen so far.
    pub fn expire(&mut self, at: DateTime<Utc>) {
        self.expires = Some(match self.expires {
            Some(current) if current <= at => current,
            _ => at,
        });
    }

    /// Folds another set of metadata into this one.
    pub fn merge(&mut self, other: &CacheMeta) {
        for tag in &other.tags {
            self.tags.insert(tag.clone());
        }
        if let Some(at) = other.expires {
            self.expire(at);
        }
    }

    /// All collected tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn contains_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// The earliest expiry any component declared, or `None` when the
    /// output is unconstrained.
    pub fn expires(&self) -> Option<DateTime<Utc>> {
        self.expires
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.expires.is_none()
    }
}
