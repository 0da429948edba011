//! Supplier filter of the catalog.

use std::sync::Arc;

use serde_json::{Value, json};
use vitrine_client::{BoxedClient, ClientBase, ClientPath, ClientRegistry, HtmlClient, RenderError};
use vitrine_view::{CacheMeta, View};

use crate::domain::Supplier;

pub const PATH: &str = "catalog/filter/supplier";
pub const TEMPLATE: &str = "catalog/filter/supplier/body";

pub const TEMPLATE_SRC: &str = "\
{{#if supplier_items}}<fieldset class=\"catalog-filter-supplier\" data-uid=\"{{uid}}\">\n\
<legend>{{supplier_legend}}</legend>\n\
<ul>\n\
{{#each supplier_items}}\
<li><label><input type=\"checkbox\" name=\"f_supid\" value=\"{{id}}\"{{#if checked}} checked=\"checked\"{{/if}}/> {{label}}</label></li>\n\
{{/each}}\
</ul>\n\
</fieldset>\n\
{{/if}}";

/// Supplier filter subpart.
///
/// One checkbox per entry of the `suppliers` slot, pre-checked when the
/// supplier's id occurs in the repeated `f_supid` parameter. Every listed
/// supplier contributes a cache tag so supplier edits flush the page.
pub struct SupplierFilter {
    base: ClientBase,
}

impl SupplierFilter {
    pub fn new(registry: Arc<ClientRegistry>) -> Self {
        Self {
            base: ClientBase::new(registry, PATH, TEMPLATE, &[]),
        }
    }

    pub fn boxed(registry: Arc<ClientRegistry>) -> BoxedClient {
        Box::new(Self::new(registry))
    }
}

impl HtmlClient for SupplierFilter {
    fn path(&self) -> &ClientPath {
        self.base.path()
    }

    fn prepare(&mut self, view: &mut View, cache: &mut CacheMeta) -> Result<(), RenderError> {
        let suppliers: Vec<Supplier> = view.get_as_or_default("suppliers")?;

        let items: Vec<Value> = suppliers
            .iter()
            .map(|supplier| {
                json!({
                    "id": supplier.id,
                    "label": supplier.label,
                    "checked": view.params().contains("f_supid", &supplier.id),
                })
            })
            .collect();

        for supplier in &suppliers {
            cache.tag(format!("supplier-{}", supplier.id));
        }

        let legend = view.translate("client", "Suppliers");
        view.set("supplier_items", items)?;
        view.set("supplier_legend", legend)?;
        self.base.prepare(view, cache)
    }

    fn body(&mut self, uid: &str, view: &mut View) -> Result<String, RenderError> {
        self.base.render(uid, view)
    }

    fn subclients(&mut self) -> Vec<&mut BoxedClient> {
        self.base.subclients()
    }
}
