//! Category tree of the catalog filter.

use std::sync::Arc;

use serde_json::{Value, json};
use slug::slugify;
use vitrine_client::{BoxedClient, ClientBase, ClientPath, ClientRegistry, HtmlClient, RenderError};
use vitrine_view::{CacheMeta, View};

use crate::domain::Category;

pub const PATH: &str = "catalog/filter/tree";
pub const TEMPLATE: &str = "catalog/filter/tree/body";

pub const TEMPLATE_SRC: &str = "\
{{#if category_items}}<nav class=\"catalog-filter-tree\" data-uid=\"{{uid}}\">\n\
<h3>{{tree_legend}}</h3>\n\
<ul>\n\
{{#each category_items}}\
<li{{#if current}} class=\"current\"{{/if}}><a href=\"{{link}}\">{{label}}</a></li>\n\
{{/each}}\
</ul>\n\
</nav>\n\
{{/if}}";

/// Category navigation subpart.
///
/// Lists the categories from the `categories` slot, marks the one selected
/// through `f_catid` and links every entry with a readable slug segment.
/// Each listed category contributes a cache tag, and a category promotion
/// that ends caps the whole page's cache lifetime.
pub struct TreeFilter {
    base: ClientBase,
}

impl TreeFilter {
    pub fn new(registry: Arc<ClientRegistry>) -> Self {
        Self {
            base: ClientBase::new(registry, PATH, TEMPLATE, &[]),
        }
    }

    pub fn boxed(registry: Arc<ClientRegistry>) -> BoxedClient {
        Box::new(Self::new(registry))
    }
}

impl HtmlClient for TreeFilter {
    fn path(&self) -> &ClientPath {
        self.base.path()
    }

    fn prepare(&mut self, view: &mut View, cache: &mut CacheMeta) -> Result<(), RenderError> {
        let categories: Vec<Category> = view.get_as_or_default("categories")?;
        let current = view.param_or("f_catid", "");

        let items: Vec<Value> = categories
            .iter()
            .map(|cat| {
                let link = view.link(
                    &format!("catalog/list/{}", slugify(&cat.label)),
                    &[("f_catid".to_string(), cat.id.clone())],
                );
                json!({
                    "id": cat.id,
                    "label": cat.label,
                    "link": link,
                    "current": cat.id == current,
                })
            })
            .collect();

        for cat in &categories {
            cache.tag(format!("catalog-{}", cat.id));
            if let Some(until) = cat.until {
                cache.expire(until);
            }
        }

        let legend = view.translate("client", "Categories");
        view.set("category_items", items)?;
        view.set("tree_legend", legend)?;
        self.base.prepare(view, cache)
    }

    fn body(&mut self, uid: &str, view: &mut View) -> Result<String, RenderError> {
        self.base.render(uid, view)
    }

    fn subclients(&mut self) -> Vec<&mut BoxedClient> {
        self.base.subclients()
    }
}
