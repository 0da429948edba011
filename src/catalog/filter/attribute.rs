//! Attribute filter of the catalog, checkboxes grouped by attribute type.

use std::sync::Arc;

use itertools::Itertools;
use serde_json::{Value, json};
use vitrine_client::{BoxedClient, ClientBase, ClientPath, ClientRegistry, HtmlClient, RenderError};
use vitrine_view::{CacheMeta, View};

use crate::domain::Attribute;

pub const PATH: &str = "catalog/filter/attribute";
pub const TEMPLATE: &str = "catalog/filter/attribute/body";

pub const TEMPLATE_SRC: &str = "\
{{#if attribute_groups}}<fieldset class=\"catalog-filter-attribute\" data-uid=\"{{uid}}\">\n\
<legend>{{attribute_legend}}</legend>\n\
{{#each attribute_groups}}\
<div class=\"attr-type-{{type}}\">\n\
<h4>{{type}}</h4>\n\
<ul>\n\
{{#each items}}\
<li><label><input type=\"checkbox\" name=\"f_attrid\" value=\"{{id}}\"{{#if checked}} checked=\"checked\"{{/if}}/> {{label}}</label></li>\n\
{{/each}}\
</ul>\n\
</div>\n\
{{/each}}\
</fieldset>\n\
{{/if}}";

/// Attribute filter subpart.
///
/// Groups the attributes from the `attributes` slot by their type code in
/// first-seen order; a checkbox is pre-checked when its id occurs in the
/// repeated `f_attrid` parameter.
pub struct AttributeFilter {
    base: ClientBase,
}

impl AttributeFilter {
    pub fn new(registry: Arc<ClientRegistry>) -> Self {
        Self {
            base: ClientBase::new(registry, PATH, TEMPLATE, &[]),
        }
    }

    pub fn boxed(registry: Arc<ClientRegistry>) -> BoxedClient {
        Box::new(Self::new(registry))
    }
}

impl HtmlClient for AttributeFilter {
    fn path(&self) -> &ClientPath {
        self.base.path()
    }

    fn prepare(&mut self, view: &mut View, cache: &mut CacheMeta) -> Result<(), RenderError> {
        let attributes: Vec<Attribute> = view.get_as_or_default("attributes")?;

        let types: Vec<String> = attributes
            .iter()
            .map(|attr| attr.type_code.clone())
            .unique()
            .collect();
        let groups: Vec<Value> = types
            .into_iter()
            .map(|type_code| {
                let items: Vec<Value> = attributes
                    .iter()
                    .filter(|attr| attr.type_code == type_code)
                    .map(|attr| {
                        json!({
                            "id": attr.id,
                            "label": attr.label,
                            "checked": view.params().contains("f_attrid", &attr.id),
                        })
                    })
                    .collect();
                json!({ "type": type_code, "items": items })
            })
            .collect();

        let legend = view.translate("client", "Attributes");
        view.set("attribute_groups", groups)?;
        view.set("attribute_legend", legend)?;
        self.base.prepare(view, cache)
    }

    fn body(&mut self, uid: &str, view: &mut View) -> Result<String, RenderError> {
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

    fn attributes() -> Value {
        json!([
            { "id": "7", "type": "color", "label": "Red" },
            { "id": "8", "type": "size", "label": "M" },
            { "id": "9", "type": "color", "label": "Blue" },
        ])
    }

    #[test]
    fn test_attributes_grouped_by_type_in_first_seen_order() {
        let mut client = create_client(PATH, json!({}));
        let mut view = create_view(json!({}), &[]);
        view.set("attributes", attributes()).unwrap();

        client.prepare(&mut view, &mut CacheMeta::new()).unwrap();
        let html = client.body("u1", &mut view).unwrap();

        let color = html.find("attr-type-color").unwrap();
        let size = html.find("attr-type-size").unwrap();
        assert!(color < size);
        // both colors land in the one color group
        let group = &html[color..size];
        assert!(group.contains("Red"));
        assert!(group.contains("Blue"));
    }

    #[test]
    fn test_checked_follows_repeated_parameter() {
        let mut client = create_client(PATH, json!({}));
        let mut view = create_view(json!({}), &[("f_attrid", "7"), ("f_attrid", "9")]);
        view.set("attributes", attributes()).unwrap();

        client.prepare(&mut view, &mut CacheMeta::new()).unwrap();
        let html = client.body("u1", &mut view).unwrap();

        assert!(html.contains("value=\"7\" checked=\"checked\""));
        assert!(html.contains("value=\"9\" checked=\"checked\""));
        assert!(!html.contains("value=\"8\" checked=\"checked\""));
    }
}
