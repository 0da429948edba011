//! Process-wide collaborator bundle.
//!
//! One [`Services`] value is assembled at startup and shared by every
//! request view through an `Arc`. All collaborators are `Send + Sync` trait
//! objects, so a single bundle serves any number of worker threads; the
//! per-request mutable state lives in the view, never here.

use std::sync::Arc;

use vitrine_traits::{LinkBuilder, MapTranslator, PdfRenderer, TemplateEngine, Translator};

use crate::config::Config;
use crate::view::ViewError;

/// Immutable collaborator set shared by all views.
#[derive(Debug)]
pub struct Services {
    engine: Arc<dyn TemplateEngine>,
    translator: Arc<dyn Translator>,
    links: Arc<dyn LinkBuilder>,
    pdf: Option<Arc<dyn PdfRenderer>>,
    config: Config,
}

impl Services {
    pub fn builder() -> ServicesBuilder {
        ServicesBuilder::default()
    }

    pub fn engine(&self) -> &dyn TemplateEngine {
        self.engine.as_ref()
    }

    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }

    pub fn links(&self) -> &dyn LinkBuilder {
        self.links.as_ref()
    }

    /// The PDF renderer, when one was installed at startup.
    pub fn pdf(&self) -> Option<&dyn PdfRenderer> {
        self.pdf.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Builder for [`Services`].
///
/// A template engine and a link builder are mandatory; the translator
/// defaults to an empty [`MapTranslator`] (which passes text through), the
/// PDF renderer is optional and the configuration defaults to empty.
#[derive(Debug, Default)]
pub struct ServicesBuilder {
    engine: Option<Arc<dyn TemplateEngine>>,
    translator: Option<Arc<dyn Translator>>,
    links: Option<Arc<dyn LinkBuilder>>,
    pdf: Option<Arc<dyn PdfRenderer>>,
    config: Option<Config>,
}

impl ServicesBuilder {
    pub fn with_engine(mut self, engine: impl TemplateEngine + 'static) -> Self {
        self.engine = Some(Arc::new(engine));
        self
    }

    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Some(Arc::new(translator));
        self
    }

    pub fn with_links(mut self, links: impl LinkBuilder + 'static) -> Self {
        self.links = Some(Arc::new(links));
        self
    }

    pub fn with_pdf(mut self, pdf: impl PdfRenderer + 'static) -> Self {
        self.pdf = Some(Arc::new(pdf));
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> Result<Services, ViewError> {
        let engine = self.engine.ok_or(ViewError::MissingService("template engine"))?;
        let links = self.links.ok_or(ViewError::MissingService("link builder"))?;
        Ok(Services {
            engine,
            translator: self
                .translator
                .unwrap_or_else(|| Arc::new(MapTranslator::new())),
            links,
            pdf: self.pdf,
            config: self.config.unwrap_or_default(),
        })
    }
}
