//! Order summary table, shared by account pages, e-mails and the PDF copy.

use std::sync::Arc;

use serde_json::{Value, json};
use vitrine_client::{BoxedClient, ClientBase, ClientPath, ClientRegistry, HtmlClient, RenderError};
use vitrine_view::{CacheMeta, View};

use crate::domain::{Order, format_money};

pub const PATH: &str = "order/summary";
pub const TEMPLATE: &str = "order/summary/body";

// Kept well-formed XML on purpose; the PDF path feeds this through an XML
// reader.
pub const TEMPLATE_SRC: &str = "\
<section class=\"order-summary\" data-uid=\"{{uid}}\">\n\
<h2>{{summary_title}} {{order_id}} ({{order_date}})</h2>\n\
<table>\n\
<thead>\n\
<tr><th>{{col_product}}</th><th>{{col_quantity}}</th><th>{{col_price}}</th><th>{{col_total}}</th></tr>\n\
</thead>\n\
<tbody>\n\
{{#each order_lines}}\
<tr><td>{{product}}</td><td>{{quantity}}</td><td>{{price}} {{../order_currency}}</td><td>{{total}} {{../order_currency}}</td></tr>\n\
{{/each}}\
</tbody>\n\
<tfoot>\n\
<tr><td>{{total_label}}</td><td></td><td></td><td>{{order_total}} {{order_currency}}</td></tr>\n\
</tfoot>\n\
</table>\n\
{{{body}}}\
</section>\n";

/// Renders one order as a line-item table with a grand total.
///
/// Requires the `order` slot; rendering a summary without an order is a
/// caller bug and aborts the subtree.
pub struct OrderSummary {
    base: ClientBase,
}

impl OrderSummary {
    pub fn new(registry: Arc<ClientRegistry>) -> Self {
        Self {
            base: ClientBase::new(registry, PATH, TEMPLATE, &[]),
        }
    }

    pub fn boxed(registry: Arc<ClientRegistry>) -> BoxedClient {
        Box::new(Self::new(registry))
    }
}

impl HtmlClient for OrderSummary {
    fn path(&self) -> &ClientPath {
        self.base.path()
    }

    fn prepare(&mut self, view: &mut View, cache: &mut CacheMeta) -> Result<(), RenderError> {
        let order: Order = view.get_as("order")?;

        let lines: Vec<Value> = order
            .lines
            .iter()
            .map(|line| {
                json!({
                    "product": line.product,
                    "quantity": line.quantity,
                    "price": format_money(line.price),
                    "total": format_money(line.total()),
                })
            })
            .collect();

        cache.tag(format!("order-{}", order.id));

        view.set("order_lines", lines)?;
        view.set("order_id", &order.id)?;
        view.set("order_date", order.created.format("%Y-%m-%d").to_string())?;
        view.set("order_currency", &order.currency)?;
        view.set("order_total", format_money(order.total()))?;
        for (slot, text) in [
            ("summary_title", "Order"),
            ("col_product", "Product"),
            ("col_quantity", "Quantity"),
            ("col_price", "Price"),
            ("col_total", "Total"),
            ("total_label", "Sum"),
        ] {
            let translated = view.translate("client", text);
            view.set(slot, translated)?;
        }
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
