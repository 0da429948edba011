//! The per-request view context.
//!
//! A [`View`] carries everything a component tree touches while rendering
//! one request: free-form data slots (what components prepare and templates
//! read), the request parameters, the block registry, an optional outgoing
//! e-mail message and the shared service bundle. It is threaded `&mut`
//! through the tree; nothing in it is shared between requests except the
//! `Arc<Services>` handle.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use vitrine_traits::{AttachmentSink, TemplateError};

use crate::blocks::BlockRegistry;
use crate::config::Config;
use crate::encoder::Encoder;
use crate::params::Params;
use crate::services::Services;

/// Errors from view slot access and template rendering.
#[derive(Error, Debug)]
pub enum ViewError {
    #[error("View slot '{slot}' is missing")]
    MissingSlot { slot: String },

    #[error("View slot '{slot}' has an unexpected shape: {message}")]
    SlotShape { slot: String, message: String },

    #[error("Failed to store view slot '{slot}': {message}")]
    SlotStore { slot: String, message: String },

    #[error("Services are missing a {0}")]
    MissingService(&'static str),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Per-request data carrier handed to every component and template.
#[derive(Debug)]
pub struct View {
    slots: BTreeMap<String, Value>,
    params: Params,
    blocks: BlockRegistry,
    mail: Option<Box<dyn AttachmentSink>>,
    services: Arc<Services>,
}

impl View {
    pub fn new(services: Arc<Services>) -> Self {
        Self::with_params(services, Params::new())
    }

    pub fn with_params(services: Arc<Services>, params: Params) -> Self {
        Self {
            slots: BTreeMap::new(),
            params,
            blocks: BlockRegistry::new(),
            mail: None,
            services,
        }
    }

    /// The shared collaborator bundle.
    pub fn services(&self) -> &Arc<Services> {
        &self.services
    }

    /// Raw slot value, if a component stored one.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.slots.get(name)
    }

    /// Deserializes the slot `name` into `T`.
    ///
    /// A missing slot and a slot of the wrong shape are distinct errors;
    /// components use this for the data their templates cannot do without.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Result<T, ViewError> {
        let value = self.slots.get(name).ok_or_else(|| ViewError::MissingSlot {
            slot: name.to_string(),
        })?;
        serde_json::from_value(value.clone()).map_err(|e| ViewError::SlotShape {
            slot: name.to_string(),
            message: e.to_string(),
        })
    }

    /// Like [`get_as`](Self::get_as), but a missing slot yields the type's
    /// default instead of an error. A present slot of the wrong shape is
    /// still an error.
    pub fn get_as_or_default<T>(&self, name: &str) -> Result<T, ViewError>
    where
        T: DeserializeOwned + Default,
    {
        if self.slots.contains_key(name) {
            self.get_as(name)
        } else {
            Ok(T::default())
        }
    }

    /// Stores a slot value for templates and descendant components.
    pub fn set(&mut self, name: impl Into<String>, value: impl Serialize) -> Result<(), ViewError> {
        let name = name.into();
        let value = serde_json::to_value(value).map_err(|e| ViewError::SlotStore {
            slot: name.clone(),
            message: e.to_string(),
        })?;
        self.slots.insert(name, value);
        Ok(())
    }

    /// First value of a request parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn param_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.params.get(name).unwrap_or(default)
    }

    /// All values of a repeated request parameter.
    pub fn param_all(&self, name: &str) -> &[String] {
        self.params.all(name)
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn config(&self) -> &Config {
        self.services.config()
    }

    pub fn translate(&self, domain: &str, text: &str) -> String {
        self.services.translator().translate(domain, text)
    }

    pub fn link(&self, target: &str, params: &[(String, String)]) -> String {
        self.services.links().link(target, params)
    }

    pub fn encoder(&self) -> Encoder {
        Encoder
    }

    pub fn blocks(&self) -> &BlockRegistry {
        &self.blocks
    }

    pub fn blocks_mut(&mut self) -> &mut BlockRegistry {
        &mut self.blocks
    }

    /// Renders the template at `path` with the current slots.
    ///
    /// Committed blocks are exposed to the template read-only under the
    /// `_blocks` object, so a page shell can echo fragments captured by
    /// components rendered further down.
    pub fn render(&self, path: &str) -> Result<String, ViewError> {
        let data = self.template_data();
        Ok(self.services.engine().render(path, &data)?)
    }

    /// Renders `path` with the current slots plus `vars` layered on top.
    pub fn partial(&self, path: &str, vars: &Value) -> Result<String, ViewError> {
        let mut data = self.template_data();
        if let (Value::Object(base), Value::Object(extra)) = (&mut data, vars) {
            for (key, value) in extra {
                base.insert(key.clone(), value.clone());
            }
        }
        Ok(self.services.engine().render(path, &data)?)
    }

    fn template_data(&self) -> Value {
        let mut data = Map::new();
        for (name, value) in &self.slots {
            data.insert(name.clone(), value.clone());
        }
        let mut blocks = Map::new();
        for (name, text) in self.blocks.committed() {
            blocks.insert(name.to_string(), Value::String(text.to_string()));
        }
        data.insert("_blocks".to_string(), Value::Object(blocks));
        Value::Object(data)
    }

    /// Installs the outgoing message the e-mail components attach to.
    pub fn set_mail(&mut self, mail: Box<dyn AttachmentSink>) {
        self.mail = Some(mail);
    }

    pub fn mail_mut(&mut self) -> Option<&mut (dyn AttachmentSink + 'static)> {
        self.mail.as_deref_mut()
    }

    pub fn take_mail(&mut self) -> Option<Box<dyn AttachmentSink>> {
        self.mail.take()
    }
}
