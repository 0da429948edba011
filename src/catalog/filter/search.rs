//! Full-text search form of the catalog filter.

use std::sync::Arc;

use vitrine_client::{BoxedClient, ClientBase, ClientPath, ClientRegistry, HtmlClient, RenderError};
use vitrine_view::{CacheMeta, View};

pub const PATH: &str = "catalog/filter/search";
pub const TEMPLATE: &str = "catalog/filter/search/body";

pub const TEMPLATE_SRC: &str = "\
<div class=\"catalog-filter-search\" data-uid=\"{{uid}}\">\n\
<label>{{search_label}} <input type=\"search\" name=\"f_search\" value=\"{{search_value}}\"/></label>\n\
</div>\n";

/// Search input subpart. Echoes the current `f_search` parameter back into
/// the input and announces the suggestion endpoint to browsers through an
/// OpenSearch link captured into the `head` block. The surrounding form
/// comes from the filter component.
pub struct SearchFilter {
    base: ClientBase,
}

impl SearchFilter {
    pub fn new(registry: Arc<ClientRegistry>) -> Self {
        Self {
            base: ClientBase::new(registry, PATH, TEMPLATE, &[]),
        }
    }

    pub fn boxed(registry: Arc<ClientRegistry>) -> BoxedClient {
        Box::new(Self::new(registry))
    }
}

impl HtmlClient for SearchFilter {
    fn path(&self) -> &ClientPath {
        self.base.path()
    }

    fn prepare(&mut self, view: &mut View, cache: &mut CacheMeta) -> Result<(), RenderError> {
        let value = view.param_or("f_search", "").to_string();
        let label = view.translate("client", "Search");
        view.set("search_value", value)?;
        view.set("search_label", label)?;

        self.base.prepare(view, cache)?;

        // The discovery link belongs in the page head no matter where in
        // the page this form is placed.
        let shop: String = view.get_as("shop")?;
        let href = view.link("catalog/suggest", &[]);
        let link = format!(
            "<link rel=\"search\" type=\"application/opensearchdescription+xml\" href=\"{}\" title=\"{}\"/>",
            view.encoder().attr(&href),
            view.encoder().attr(&shop),
        );
        let blocks = view.blocks_mut();
        blocks.start("head")?;
        blocks.write(&link)?;
        blocks.stop()?;
        Ok(())
    }

    fn body(&mut self, uid: &str, view: &mut View) -> Result<String, RenderError> {
        self.base.render(uid, view)
    }

    fn subclients(&mut self) -> Vec<&mut BoxedClient> {
        self.base.subclients()
    }
}
