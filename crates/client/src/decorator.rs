//! Transparent component decorators.
//!
//! A decorator owns exactly one inner client, implements [`HtmlClient`]
//! itself and forwards every call, so a decorated component is
//! indistinguishable from a bare one. Which decorators wrap a component is
//! configured per path; [`decorator_chain`] computes the effective name
//! list from the framework defaults and the configured overrides.

use std::time::Instant;

use itertools::Itertools;
use log::debug;
use vitrine_view::{CacheMeta, View};

use crate::client::{BoxedClient, HtmlClient};
use crate::error::RenderError;
use crate::path::ClientPath;

/// Computes the effective decorator chain for one component.
///
/// The framework defaults and the globally configured names are joined
/// order-preserving with first-occurrence dedup, the excluded names are
/// dropped, and the locally configured names are appended. The registry
/// wraps base-first, so the last name in the result ends up outermost.
pub fn decorator_chain(
    defaults: &[String],
    global: &[String],
    excludes: &[String],
    local: &[String],
) -> Vec<String> {
    let mut chain: Vec<String> = defaults
        .iter()
        .chain(global.iter())
        .unique()
        .filter(|&name| !excludes.contains(name))
        .cloned()
        .collect();
    chain.extend(local.iter().cloned());
    chain
}

/// Logs how long `prepare` and `body` take for the wrapped component.
///
/// Output-transparent, which is why it is safe as a framework default.
pub struct Timing {
    inner: BoxedClient,
}

impl Timing {
    pub fn new(inner: BoxedClient) -> Self {
        Self { inner }
    }
}

impl HtmlClient for Timing {
    fn path(&self) -> &ClientPath {
        self.inner.path()
    }

    fn prepare(&mut self, view: &mut View, cache: &mut CacheMeta) -> Result<(), RenderError> {
        let started = Instant::now();
        let result = self.inner.prepare(view, cache);
        debug!("prepare {} took {:?}", self.inner.path(), started.elapsed());
        result
    }

    fn body(&mut self, uid: &str, view: &mut View) -> Result<String, RenderError> {
        let started = Instant::now();
        let result = self.inner.body(uid, view);
        debug!("body {} took {:?}", self.inner.path(), started.elapsed());
        result
    }

    fn subclients(&mut self) -> Vec<&mut BoxedClient> {
        self.inner.subclients()
    }
}

/// Wraps non-empty output in a `<div>` carrying the component path as a
/// CSS class, so stylesheets can target any component without template
/// changes. Empty output stays empty, keeping guard components invisible.
pub struct Container {
    inner: BoxedClient,
}

impl Container {
    pub fn new(inner: BoxedClient) -> Self {
        Self { inner }
    }
}

impl HtmlClient for Container {
    fn path(&self) -> &ClientPath {
        self.inner.path()
    }

    fn prepare(&mut self, view: &mut View, cache: &mut CacheMeta) -> Result<(), RenderError> {
        self.inner.prepare(view, cache)
    }

    fn body(&mut self, uid: &str, view: &mut View) -> Result<String, RenderError> {
        let body = self.inner.body(uid, view)?;
        if body.is_empty() {
            return Ok(body);
        }
        Ok(format!(
            "<div class=\"{}\">{}</div>",
            self.inner.path().css_class(),
            body
        ))
    }

    fn subclients(&mut self) -> Vec<&mut BoxedClient> {
        self.inner.subclients()
    }
}
