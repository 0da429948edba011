//! Component and decorator factories.
//!
//! The registry is assembled once at startup and shared immutably through
//! an `Arc`. Component factories receive the registry handle, so the
//! components they create can resolve their own sub-clients later without
//! any global state.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::debug;
use vitrine_view::Config;

use crate::client::BoxedClient;
use crate::decorator::decorator_chain;
use crate::error::RenderError;

type ClientFactory = Box<dyn Fn(Arc<ClientRegistry>) -> BoxedClient + Send + Sync>;
type DecoratorFactory = Box<dyn Fn(BoxedClient) -> BoxedClient + Send + Sync>;

/// Resolves logical paths to decorated component instances.
pub struct ClientRegistry {
    clients: HashMap<(String, String), ClientFactory>,
    decorators: HashMap<String, DecoratorFactory>,
    default_decorators: Vec<String>,
}

impl ClientRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Creates the component registered for `path`, wrapped in its
    /// configured decorator chain.
    ///
    /// The variant name comes from `client/html/<path>/name` (default
    /// `Standard`), the chain from the `decorators/{excludes,global,local}`
    /// keys under the same prefix. Unknown client or decorator names fail
    /// fast here, before anything renders.
    pub fn create(self: &Arc<Self>, path: &str, config: &Config) -> Result<BoxedClient, RenderError> {
        let variant = config
            .string_or(&format!("client/html/{path}/name"), "Standard")
            .to_string();

        let factory = self
            .clients
            .get(&(path.to_string(), variant.clone()))
            .ok_or_else(|| RenderError::UnknownClient {
                path: path.to_string(),
                variant: variant.clone(),
            })?;
        let mut client = factory(Arc::clone(self));

        let prefix = format!("client/html/{path}/decorators");
        let global = config.string_list(&format!("{prefix}/global"))?;
        let excludes = config.string_list(&format!("{prefix}/excludes"))?;
        let local = config.string_list(&format!("{prefix}/local"))?;

        for name in decorator_chain(&self.default_decorators, &global, &excludes, &local) {
            let decorator = self
                .decorators
                .get(&name)
                .ok_or_else(|| RenderError::UnknownDecorator(name.clone()))?;
            client = decorator(client);
        }
        Ok(client)
    }

    /// True if a factory was registered for `(path, variant)`.
    pub fn knows(&self, path: &str, variant: &str) -> bool {
        self.clients
            .contains_key(&(path.to_string(), variant.to_string()))
    }
}

impl fmt::Debug for ClientRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientRegistry")
            .field("clients", &self.clients.len())
            .field("decorators", &self.decorators.len())
            .field("default_decorators", &self.default_decorators)
            .finish()
    }
}

/// Builder for [`ClientRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
    clients: HashMap<(String, String), ClientFactory>,
    decorators: HashMap<String, DecoratorFactory>,
    default_decorators: Vec<String>,
}

impl RegistryBuilder {
    /// Registers a component factory for a path and variant name.
    pub fn client<F>(mut self, path: &str, variant: &str, factory: F) -> Self
    where
        F: Fn(Arc<ClientRegistry>) -> BoxedClient + Send + Sync + 'static,
    {
        self.clients
            .insert((path.to_string(), variant.to_string()), Box::new(factory));
        self
    }

    /// Registers a decorator factory under a name usable in configuration.
    pub fn decorator<F>(mut self, name: &str, factory: F) -> Self
    where
        F: Fn(BoxedClient) -> BoxedClient + Send + Sync + 'static,
    {
        self.decorators.insert(name.to_string(), Box::new(factory));
        self
    }

    /// Sets the framework default decorator chain applied to every client
    /// unless excluded per path.
    pub fn default_decorators<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_decorators = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Arc<ClientRegistry> {
        debug!(
            "Client registry built: {} clients, {} decorators, defaults {:?}",
            self.clients.len(),
            self.decorators.len(),
            self.default_decorators
        );
        Arc::new(ClientRegistry {
            clients: self.clients,
            decorators: self.decorators,
            default_decorators: self.default_decorators,
        })
    }
}
