//! Helpers shared by the crate's unit tests.

use std::sync::Arc;

use serde_json::Value;
use vitrine_traits::{BaseUrlLinks, StaticTemplates};
use vitrine_view::{CacheMeta, Config, Services, View};

use crate::client::{BoxedClient, HtmlClient};
use crate::error::RenderError;
use crate::path::ClientPath;

/// Minimal component that records its lifecycle in view slots and cache
/// tags, so tests can observe what the composition machinery did.
pub(crate) struct Stub {
    path: ClientPath,
    output: String,
}

impl Stub {
    pub(crate) fn boxed(path: &str, output: &str) -> BoxedClient {
        Box::new(Self {
            path: ClientPath::new(path),
            output: output.to_string(),
        })
    }
}

impl HtmlClient for Stub {
    fn path(&self) -> &ClientPath {
        &self.path
    }

    fn prepare(&mut self, view: &mut View, cache: &mut CacheMeta) -> Result<(), RenderError> {
        cache.tag(format!("stub-{}", self.path.css_class()));
        view.set(format!("prepared-{}", self.path.css_class()), true)?;
        Ok(())
    }

    fn body(&mut self, uid: &str, view: &mut View) -> Result<String, RenderError> {
        view.set("last-uid", uid)?;
        Ok(self.output.clone())
    }

    fn subclients(&mut self) -> Vec<&mut BoxedClient> {
        Vec::new()
    }
}

/// Services over a verbatim template engine and a fixed base URL.
pub(crate) fn create_services(config: Value) -> Arc<Services> {
    Arc::new(
        Services::builder()
            .with_engine(StaticTemplates::new())
            .with_links(BaseUrlLinks::new("http://shop.test/").unwrap())
            .with_config(Config::new(config))
            .build()
            .unwrap(),
    )
}

pub(crate) fn create_view(config: Value) -> View {
    View::new(create_services(config))
}
