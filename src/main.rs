use std::cell::RefCell;
use std::env;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

use itertools::Itertools;
use serde_json::Value;
use vitrine::{
    AttachmentSink, Config, EmailMessage, PAGE_TEMPLATE, Params, View, render, standard_registry,
    standard_services,
};

/// Outgoing message the demo keeps a handle on, so it can write the
/// collected attachments to disk after the render.
#[derive(Debug, Clone, Default)]
struct SharedMessage(Rc<RefCell<EmailMessage>>);

impl AttachmentSink for SharedMessage {
    fn add_attachment(&mut self, data: Vec<u8>, mime: &str, filename: &str) {
        self.0.borrow_mut().add_attachment(data, mime, filename);
    }
}

/// A small CLI that renders a catalog page and a payment e-mail from a
/// JSON fixture.
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Renders the storefront demo pages from a JSON fixture.");
        eprintln!();
        eprintln!("Usage: {} <path/to/fixture.json> <output-dir>", args[0]);
        eprintln!();
        eprintln!("The fixture may contain: config, params, suppliers, categories,");
        eprintln!("attributes and order. See demos/fixture.json for a full example.");
        std::process::exit(1);
    }

    if let Err(e) = run(&args[1], &args[2]) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(fixture_path: &str, out_dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Loading fixture from {fixture_path}");
    let fixture: Value = serde_json::from_str(&fs::read_to_string(fixture_path)?)?;
    fs::create_dir_all(out_dir)?;
    let out_dir = Path::new(out_dir);

    let config = Config::new(fixture.get("config").cloned().unwrap_or_default());
    let registry = standard_registry();
    let services = standard_services(config)?;

    // Catalog page with the filter component.
    let mut view = View::with_params(Arc::clone(&services), fixture_params(&fixture));
    for slot in ["suppliers", "categories", "attributes"] {
        if let Some(value) = fixture.get(slot) {
            view.set(slot, value.clone())?;
        }
    }

    let mut filter = registry.create("catalog/filter", services.config())?;
    let rendered = render(filter.as_mut(), &mut view, "filter-1")?;
    println!(
        "Catalog filter rendered: tags [{}], expires {}",
        rendered.cache.tags().join(", "),
        rendered
            .cache
            .expires()
            .map_or("never".to_string(), |at| at.to_rfc3339()),
    );

    view.set("content", rendered.html)?;
    let page = view.render(PAGE_TEMPLATE)?;
    fs::write(out_dir.join("catalog.html"), &page)?;
    println!("Wrote {}", out_dir.join("catalog.html").display());

    // Payment e-mail with the PDF attachment, when the fixture has an order.
    if let Some(order) = fixture.get("order") {
        let mut view = View::new(Arc::clone(&services));
        view.set("order", order.clone())?;
        let message = SharedMessage::default();
        view.set_mail(Box::new(message.clone()));

        let mut email = registry.create("email/payment", services.config())?;
        let rendered = render(email.as_mut(), &mut view, "email-1")?;

        {
            let mut message = message.0.borrow_mut();
            if let Some(subject) = view.get("email_title").and_then(Value::as_str) {
                message.set_subject(subject);
            }
            message.set_html_body(&rendered.html);
        }
        fs::write(out_dir.join("email.html"), &rendered.html)?;
        println!("Wrote {}", out_dir.join("email.html").display());

        let message = message.0.borrow();
        if message.attachments().is_empty() {
            println!("Payment status below the configured threshold, no PDF attached");
        }
        for attachment in message.attachments() {
            fs::write(out_dir.join(&attachment.filename), &attachment.data)?;
            println!(
                "Wrote {} ({}, {} bytes)",
                out_dir.join(&attachment.filename).display(),
                attachment.mime,
                attachment.data.len()
            );
        }
    }

    Ok(())
}

fn fixture_params(fixture: &Value) -> Params {
    let mut params = Params::new();
    if let Some(map) = fixture.get("params").and_then(Value::as_object) {
        for (name, values) in map {
            match values {
                Value::Array(values) => {
                    for value in values {
                        if let Some(value) = value.as_str() {
                            params.push(name, value);
                        }
                    }
                }
                Value::String(value) => params.push(name, value),
                _ => {}
            }
        }
    }
    params
}
