//! Wiring for the shipped component set.
//!
//! `standard_registry` and `standard_services` assemble everything this
//! crate ships: the catalog filter family, the order summary, the payment
//! e-mail with its PDF subpart, the Handlebars templates they render and
//! the collaborators behind the service seams. Deployments that add or
//! replace components build their own registry the same way.

use std::sync::Arc;

use vitrine_client::{ClientRegistry, Container, RenderError, Timing};
use vitrine_pdf::LopdfRenderer;
use vitrine_traits::{BaseUrlLinks, TemplateError};
use vitrine_view::{Config, Services};

use crate::catalog::filter;
use crate::email::payment;
use crate::engine::HandlebarsEngine;
use crate::order::summary;

/// Template path of the demo page shell.
pub const PAGE_TEMPLATE: &str = "page/standard";

pub const PAGE_TEMPLATE_SRC: &str = "\
<!DOCTYPE html>\n\
<html lang=\"{{lang}}\">\n\
<head>\n\
<meta charset=\"utf-8\"/>\n\
<title>{{shop}}</title>\n\
{{{_blocks.head}}}\n\
</head>\n\
<body>\n\
<header><h1>{{shop}}</h1></header>\n\
<main>\n\
{{{content}}}\
</main>\n\
</body>\n\
</html>\n";

/// A Handlebars engine with every shipped template registered.
///
/// Register over a path afterwards to override a shipped template.
pub fn standard_engine() -> Result<HandlebarsEngine, TemplateError> {
    let mut engine = HandlebarsEngine::new();
    for (path, source) in [
        (PAGE_TEMPLATE, PAGE_TEMPLATE_SRC),
        (filter::TEMPLATE, filter::TEMPLATE_SRC),
        (filter::search::TEMPLATE, filter::search::TEMPLATE_SRC),
        (filter::tree::TEMPLATE, filter::tree::TEMPLATE_SRC),
        (filter::attribute::TEMPLATE, filter::attribute::TEMPLATE_SRC),
        (filter::supplier::TEMPLATE, filter::supplier::TEMPLATE_SRC),
        (summary::TEMPLATE, summary::TEMPLATE_SRC),
        (payment::TEMPLATE, payment::TEMPLATE_SRC),
        (payment::pdf::TEMPLATE, payment::pdf::TEMPLATE_SRC),
    ] {
        engine.register(path, source)?;
    }
    Ok(engine)
}

/// The registry of all shipped components and decorators.
///
/// Every component registers under the `Standard` variant; the `Timing`
/// decorator is applied to every client by default and `Container` is
/// available for opt-in through the decorator config keys.
pub fn standard_registry() -> Arc<ClientRegistry> {
    ClientRegistry::builder()
        .client(filter::PATH, "Standard", filter::CatalogFilter::boxed)
        .client(
            filter::search::PATH,
            "Standard",
            filter::SearchFilter::boxed,
        )
        .client(filter::tree::PATH, "Standard", filter::TreeFilter::boxed)
        .client(
            filter::attribute::PATH,
            "Standard",
            filter::AttributeFilter::boxed,
        )
        .client(
            filter::supplier::PATH,
            "Standard",
            filter::SupplierFilter::boxed,
        )
        .client(summary::PATH, "Standard", summary::OrderSummary::boxed)
        .client(payment::PATH, "Standard", payment::PaymentEmail::boxed)
        .client(payment::pdf::PATH, "Standard", payment::PaymentPdf::boxed)
        .decorator("Timing", |inner| Box::new(Timing::new(inner)))
        .decorator("Container", |inner| Box::new(Container::new(inner)))
        .default_decorators(["Timing"])
        .build()
}

/// The standard collaborator bundle for a deployment config.
///
/// Links point at `shop/base_url`, templates come from
/// [`standard_engine`], PDFs from the bundled renderer. The translator
/// stays the identity mapping; swap it by building the services by hand.
pub fn standard_services(config: Config) -> Result<Arc<Services>, RenderError> {
    let base = config
        .string_or("shop/base_url", "http://localhost/")
        .to_string();
    let services = Services::builder()
        .with_engine(standard_engine()?)
        .with_links(BaseUrlLinks::new(&base)?)
        .with_pdf(LopdfRenderer::default())
        .with_config(config)
        .build()?;
    Ok(Arc::new(services))
}
