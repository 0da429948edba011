//! Catalog filter component and its subparts.

pub mod attribute;
pub mod search;
pub mod supplier;
pub mod tree;

use std::sync::Arc;

use vitrine_client::{BoxedClient, ClientBase, ClientPath, ClientRegistry, HtmlClient, RenderError};
use vitrine_view::{CacheMeta, View};

pub use attribute::AttributeFilter;
pub use search::SearchFilter;
pub use supplier::SupplierFilter;
pub use tree::TreeFilter;

pub const PATH: &str = "catalog/filter";
pub const TEMPLATE: &str = "catalog/filter/body";

/// Subparts rendered into the filter form when
/// `client/html/catalog/filter/subparts` is not configured.
pub const DEFAULT_SUBPARTS: [&str; 4] = [
    "catalog/filter/search",
    "catalog/filter/tree",
    "catalog/filter/attribute",
    "catalog/filter/supplier",
];

pub const TEMPLATE_SRC: &str = "\
<form class=\"catalog-filter\" method=\"GET\" action=\"{{filter_action}}\" data-uid=\"{{uid}}\">\n\
{{{body}}}\
<button type=\"submit\">{{filter_submit}}</button>\n\
</form>\n";

/// The catalog filter form.
///
/// A pure aggregate: the search, tree, attribute and supplier subparts do
/// the work, this component supplies the shared form and concatenates
/// their bodies in configured order.
pub struct CatalogFilter {
    base: ClientBase,
}

impl CatalogFilter {
    pub fn new(registry: Arc<ClientRegistry>) -> Self {
        Self {
            base: ClientBase::new(registry, PATH, TEMPLATE, &DEFAULT_SUBPARTS),
        }
    }

    pub fn boxed(registry: Arc<ClientRegistry>) -> BoxedClient {
        Box::new(Self::new(registry))
    }
}

impl HtmlClient for CatalogFilter {
    fn path(&self) -> &ClientPath {
        self.base.path()
    }

    fn prepare(&mut self, view: &mut View, cache: &mut CacheMeta) -> Result<(), RenderError> {
        let action = view.link("catalog/list", &[]);
        let submit = view.translate("client", "Apply filters");
        view.set("filter_action", action)?;
        view.set("filter_submit", submit)?;
        self.base.prepare(view, cache)
    }

    fn body(&mut self, uid: &str, view: &mut View) -> Result<String, RenderError> {
        let children = self.base.children_body(uid, view)?;
        view.set("body", children)?;
        self.base.render(uid, view)
    }

    fn subclients(&mut self) -> Vec<&mut BoxedClient> {
        self.base.subclients()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{create_client, create_view};
    use serde_json::json;

    #[test]
    fn test_filter_renders_subparts_in_default_order() {
        let mut client = create_client(PATH, json!({}));
        let mut view = create_view(json!({}), &[]);
        view.set("suppliers", json!([{ "id": "12", "label": "Acme" }]))
            .unwrap();
        view.set("categories", json!([{ "id": "101", "label": "Shoes" }]))
            .unwrap();

        client.prepare(&mut view, &mut CacheMeta::new()).unwrap();
        let html = client.body("u1", &mut view).unwrap();

        let search = html.find("catalog-filter-search").unwrap();
        let tree = html.find("catalog-filter-tree").unwrap();
        let supplier = html.find("catalog-filter-supplier").unwrap();
        assert!(search < tree && tree < supplier);
        assert!(html.starts_with("<form class=\"catalog-filter\""));
        assert_eq!(html.matches("<form").count(), 1);
    }

    #[test]
    fn test_subparts_config_drops_sections() {
        let config = json!({
            "client": { "html": { "catalog": { "filter": {
                "subparts": ["catalog/filter/search"]
            } } } }
        });
        let mut client = create_client(PATH, config.clone());
        let mut view = create_view(config, &[]);
        view.set("suppliers", json!([{ "id": "12", "label": "Acme" }]))
            .unwrap();

        client.prepare(&mut view, &mut CacheMeta::new()).unwrap();
        let html = client.body("u1", &mut view).unwrap();

        assert!(html.contains("catalog-filter-search"));
        assert!(!html.contains("catalog-filter-supplier"));
    }
}
