//! PDF order confirmation attached to the payment e-mail.

use std::sync::Arc;

use log::debug;
use vitrine_client::{BoxedClient, ClientBase, ClientPath, ClientRegistry, HtmlClient, RenderError};
use vitrine_view::{CacheMeta, View};

use crate::domain::{Order, payment_status};

pub const PATH: &str = "email/payment/pdf";
pub const TEMPLATE: &str = "email/payment/pdf/body";
pub const DEFAULT_SUBPARTS: [&str; 1] = ["order/summary"];

/// Config key for the minimum payment status that gets an attachment.
pub const STATUS_KEY: &str = "client/html/email/payment/pdf/status";

// The printable document shell. Must stay well-formed XML; it is parsed,
// not displayed.
pub const TEMPLATE_SRC: &str = "\
<html lang=\"{{lang}}\">\n\
<head><title>{{document_title}}</title></head>\n\
<body>\n\
{{{document_body}}}\
</body>\n\
</html>\n";

/// Attaches a PDF copy of the order confirmation to the outgoing message.
///
/// Guarded: orders whose payment status is below the configured threshold
/// (authorized, unless overridden) get no attachment and no side effect at
/// all. The component contributes nothing to the e-mail markup either way;
/// its whole output is the attachment.
pub struct PaymentPdf {
    base: ClientBase,
}

impl PaymentPdf {
    pub fn new(registry: Arc<ClientRegistry>) -> Self {
        Self {
            base: ClientBase::new(registry, PATH, TEMPLATE, &DEFAULT_SUBPARTS),
        }
    }

    pub fn boxed(registry: Arc<ClientRegistry>) -> BoxedClient {
        Box::new(Self::new(registry))
    }

    fn attachment_due(&self, view: &View) -> Result<bool, RenderError> {
        let order: Order = view.get_as("order")?;
        let threshold = view
            .config()
            .int_or(STATUS_KEY, payment_status::AUTHORIZED);
        Ok(order.payment_status >= threshold)
    }
}

impl HtmlClient for PaymentPdf {
    fn path(&self) -> &ClientPath {
        self.base.path()
    }

    fn prepare(&mut self, view: &mut View, cache: &mut CacheMeta) -> Result<(), RenderError> {
        if !self.attachment_due(view)? {
            return Ok(());
        }
        self.base.prepare(view, cache)
    }

    fn body(&mut self, uid: &str, view: &mut View) -> Result<String, RenderError> {
        if !self.attachment_due(view)? {
            return Ok(String::new());
        }
        let order: Order = view.get_as("order")?;

        let content = self.base.children_body(uid, view)?;
        let title = format!("{} {}", view.translate("email", "Order"), order.id);
        view.set("document_body", content)?;
        view.set("document_title", title)?;
        let html = self.base.render(uid, view)?;

        let services = Arc::clone(view.services());
        let renderer = services
            .pdf()
            .ok_or(RenderError::MissingCollaborator("PDF renderer"))?;
        let bytes = renderer.render(&html)?;
        debug!("{}: rendered {} PDF bytes for order {}", PATH, bytes.len(), order.id);

        let filename = format!("order-{}.pdf", order.id);
        let mail = view
            .mail_mut()
            .ok_or(RenderError::MissingCollaborator("outgoing e-mail message"))?;
        mail.add_attachment(bytes, "application/pdf", &filename);
        Ok(String::new())
    }

    fn subclients(&mut self) -> Vec<&mut BoxedClient> {
        self.base.subclients()
    }
}
