pub mod fixtures;
pub mod pdf_assertions;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use serde_json::Value;
use vitrine::{
    AttachmentSink, BaseUrlLinks, Config, EmailMessage, LopdfRenderer, MapTranslator, Params,
    Services, View, standard_engine,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Collaborators wired like `standard_services`, but pointing at the test
/// shop URL and taking the translator from the test.
pub fn create_services(config: Value) -> Arc<Services> {
    create_services_with_translator(config, MapTranslator::new())
}

pub fn create_services_with_translator(config: Value, translator: MapTranslator) -> Arc<Services> {
    let services = Services::builder()
        .with_engine(standard_engine().unwrap())
        .with_translator(translator)
        .with_links(BaseUrlLinks::new("http://shop.test/").unwrap())
        .with_pdf(LopdfRenderer::default())
        .with_config(Config::new(config))
        .build()
        .unwrap();
    Arc::new(services)
}

pub fn create_view(services: &Arc<Services>, params: &[(&str, &str)]) -> View {
    View::with_params(
        Arc::clone(services),
        Params::from_pairs(params.iter().copied()),
    )
}

/// Outgoing message double. The test keeps one handle, the view gets the
/// other, and the collected attachments stay inspectable after the render.
#[derive(Debug, Clone, Default)]
pub struct SharedMessage(pub Rc<RefCell<EmailMessage>>);

impl SharedMessage {
    pub fn attachment_count(&self) -> usize {
        self.0.borrow().attachments().len()
    }
}

impl AttachmentSink for SharedMessage {
    fn add_attachment(&mut self, data: Vec<u8>, mime: &str, filename: &str) {
        self.0.borrow_mut().add_attachment(data, mime, filename);
    }
}
