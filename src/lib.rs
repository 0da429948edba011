//! Storefront HTML rendering built from small, decoratable components.
//!
//! Every visible part of a shop page is an HTML client: it prepares its
//! view data, renders its template and nests further clients as configured
//! subparts. This crate ships the concrete component set:
//! - the catalog filter (search, category tree, attribute and supplier
//!   sections)
//! - the order summary table
//! - the payment confirmation e-mail with its guarded PDF attachment
//!
//! The composition machinery lives in the member crates and is re-exported
//! here; `bootstrap` wires the shipped set together.
//!
//! ```
//! use std::sync::Arc;
//! use vitrine::{render, standard_registry, standard_services, Config, Params, View};
//!
//! # fn main() -> Result<(), vitrine::RenderError> {
//! let config = Config::new(serde_json::json!({
//!     "shop": { "name": "Demo Shop", "base_url": "https://shop.example" }
//! }));
//! let registry = standard_registry();
//! let services = standard_services(config)?;
//!
//! let mut client = registry.create("catalog/filter", services.config())?;
//! let mut view = View::with_params(
//!     Arc::clone(&services),
//!     Params::from_pairs([("f_search", "dress")]),
//! );
//!
//! let page = render(client.as_mut(), &mut view, "filter-1")?;
//! assert!(page.html.contains("catalog-filter"));
//! # Ok(()) }
//! ```

pub mod bootstrap;
pub mod catalog;
pub mod domain;
pub mod email;
pub mod engine;
pub mod order;

#[cfg(test)]
pub(crate) mod testutil;

pub use bootstrap::{
    PAGE_TEMPLATE, standard_engine, standard_registry, standard_services,
};
pub use engine::HandlebarsEngine;

pub use vitrine_client::{
    BoxedClient, ClientBase, ClientPath, ClientRegistry, Container, HtmlClient, RegistryBuilder,
    RenderError, Rendered, Timing, render,
};
pub use vitrine_pdf::LopdfRenderer;
pub use vitrine_traits::{
    AttachmentSink, BaseUrlLinks, EmailMessage, LinkBuilder, MapTranslator, PdfRenderer,
    StaticTemplates, TemplateEngine, Translator,
};
pub use vitrine_view::{
    BlockRegistry, CacheMeta, Config, Encoder, Params, Services, Trust, View,
};
