//! Shared behavior every concrete component delegates to.

use std::sync::Arc;

use log::trace;
use vitrine_view::{CacheMeta, Config, View};

use crate::client::BoxedClient;
use crate::error::RenderError;
use crate::path::ClientPath;
use crate::registry::ClientRegistry;

/// The recurring half of every component.
///
/// There is no inheritance to hang template methods on, so each concrete
/// component owns a `ClientBase` and delegates to it explicitly: creating
/// the configured sub-clients, recursing `prepare`, collecting child
/// bodies in order and rendering the component template. The component
/// keeps full control over when each part runs.
pub struct ClientBase {
    path: ClientPath,
    template: String,
    default_subparts: Vec<String>,
    registry: Arc<ClientRegistry>,
    children: Vec<((String, String), BoxedClient)>,
    children_created: bool,
}

impl ClientBase {
    pub fn new(
        registry: Arc<ClientRegistry>,
        path: &str,
        template: &str,
        default_subparts: &[&str],
    ) -> Self {
        Self {
            path: ClientPath::new(path),
            template: template.to_string(),
            default_subparts: default_subparts.iter().map(|s| s.to_string()).collect(),
            registry,
            children: Vec::new(),
            children_created: false,
        }
    }

    pub fn path(&self) -> &ClientPath {
        &self.path
    }

    /// Common prepare stage: ensures the page-wide slots exist, creates
    /// the configured sub-clients and recurses into them with the same
    /// cache accumulator.
    pub fn prepare(&mut self, view: &mut View, cache: &mut CacheMeta) -> Result<(), RenderError> {
        self.ensure_common_slots(view)?;
        self.ensure_children(view.config())?;
        for (_, child) in &mut self.children {
            child.prepare(view, cache)?;
        }
        Ok(())
    }

    /// Collects the bodies of all sub-clients in creation order.
    pub fn children_body(&mut self, uid: &str, view: &mut View) -> Result<String, RenderError> {
        let mut html = String::new();
        for (_, child) in &mut self.children {
            html.push_str(&child.body(uid, view)?);
        }
        Ok(html)
    }

    /// Renders the component template with the current view slots; the
    /// placement `uid` is published to the template first.
    pub fn render(&self, uid: &str, view: &mut View) -> Result<String, RenderError> {
        view.set("uid", uid)?;
        Ok(view.render(&self.template)?)
    }

    /// Returns the memoized sub-client for `path`, creating and decorating
    /// it on first use. Repeated calls with the same path and configured
    /// variant return the identical instance.
    pub fn subclient(&mut self, config: &Config, path: &str) -> Result<&mut BoxedClient, RenderError> {
        let variant = config
            .string_or(&format!("client/html/{path}/name"), "Standard")
            .to_string();
        let key = (path.to_string(), variant);

        if let Some(index) = self.children.iter().position(|(k, _)| *k == key) {
            return Ok(&mut self.children[index].1);
        }

        trace!("{}: creating sub-client {} ({})", self.path, key.0, key.1);
        let client = self.registry.create(path, config)?;
        self.children.push((key, client));
        let last = self.children.len() - 1;
        Ok(&mut self.children[last].1)
    }

    /// The configured subpart list for this component.
    ///
    /// `client/html/<path>/subparts` holds full logical paths; when the key
    /// is absent the built-in defaults apply. An explicitly empty list
    /// makes the component a leaf.
    pub fn subclient_names(&self, config: &Config) -> Result<Vec<String>, RenderError> {
        let key = self.path.config_key("subparts");
        if config.get(&key).is_none() {
            return Ok(self.default_subparts.clone());
        }
        Ok(config.string_list(&key)?)
    }

    /// All sub-clients created so far, in creation order.
    pub fn subclients(&mut self) -> Vec<&mut BoxedClient> {
        self.children.iter_mut().map(|(_, child)| child).collect()
    }

    fn ensure_children(&mut self, config: &Config) -> Result<(), RenderError> {
        if self.children_created {
            return Ok(());
        }
        for name in self.subclient_names(config)? {
            self.subclient(config, &name)?;
        }
        self.children_created = true;
        Ok(())
    }

    fn ensure_common_slots(&self, view: &mut View) -> Result<(), RenderError> {
        if view.get("lang").is_none() {
            let lang = view.config().string_or("shop/locale", "en").to_string();
            view.set("lang", lang)?;
        }
        if view.get("shop").is_none() {
            let shop = view.config().string_or("shop/name", "Shop").to_string();
            view.set("shop", shop)?;
        }
        Ok(())
    }
}
