//! The two-stage render driver.

use log::warn;
use vitrine_view::{CacheMeta, View};

use crate::client::HtmlClient;
use crate::error::RenderError;

/// Output of one render pass: the markup and its cache metadata.
#[derive(Debug)]
pub struct Rendered {
    pub html: String,
    pub cache: CacheMeta,
}

/// Runs the component protocol over a tree.
///
/// `prepare` walks the whole tree first, so every template can rely on the
/// data of every node being in place; `body` then collects the markup. The
/// returned [`Rendered`] pairs the HTML with the aggregated cache tags and
/// expiry for the surrounding cache layer.
pub fn render(
    client: &mut dyn HtmlClient,
    view: &mut View,
    uid: &str,
) -> Result<Rendered, RenderError> {
    let mut cache = CacheMeta::new();
    client.prepare(view, &mut cache)?;
    let html = client.body(uid, view)?;
    if view.blocks().has_open() {
        warn!("Render pass for {} left a block open", client.path());
    }
    Ok(Rendered { html, cache })
}
