//! Payment confirmation e-mail.

pub mod pdf;

use std::sync::Arc;

use vitrine_client::{BoxedClient, ClientBase, ClientPath, ClientRegistry, HtmlClient, RenderError};
use vitrine_view::{CacheMeta, View};

use crate::domain::Order;

pub use pdf::PaymentPdf;

pub const PATH: &str = "email/payment";
pub const TEMPLATE: &str = "email/payment/body";
pub const DEFAULT_SUBPARTS: [&str; 2] = ["order/summary", "email/payment/pdf"];

pub const TEMPLATE_SRC: &str = "\
<html lang=\"{{lang}}\">\n\
<head><title>{{email_title}}</title></head>\n\
<body>\n\
<p>{{salutation}}</p>\n\
<p>{{email_intro}}</p>\n\
{{{body}}}\
<p>{{email_outro}}</p>\n\
</body>\n\
</html>\n";

/// HTML body of the payment confirmation e-mail.
///
/// Renders the salutation and the order summary; the PDF subpart runs in
/// the same pass and attaches the printable copy to the outgoing message
/// when the payment status allows it.
pub struct PaymentEmail {
    base: ClientBase,
}

impl PaymentEmail {
    pub fn new(registry: Arc<ClientRegistry>) -> Self {
        Self {
            base: ClientBase::new(registry, PATH, TEMPLATE, &DEFAULT_SUBPARTS),
        }
    }

    pub fn boxed(registry: Arc<ClientRegistry>) -> BoxedClient {
        Box::new(Self::new(registry))
    }
}

impl HtmlClient for PaymentEmail {
    fn path(&self) -> &ClientPath {
        self.base.path()
    }

    fn prepare(&mut self, view: &mut View, cache: &mut CacheMeta) -> Result<(), RenderError> {
        let order: Order = view.get_as("order")?;
        let salutation = format!("{} {},", view.translate("email", "Dear"), order.customer);
        let title = format!("{} {}", view.translate("email", "Your order"), order.id);
        let intro = view.translate("email", "Thank you for your payment.");
        let outro = view.translate(
            "email",
            "If you have any questions, please reply to this e-mail.",
        );
        view.set("salutation", salutation)?;
        view.set("email_title", title)?;
        view.set("email_intro", intro)?;
        view.set("email_outro", outro)?;
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
