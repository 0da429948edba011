//! # Vitrine Client
//!
//! The component composition core: hierarchical HTML components, the
//! registry that builds them, transparent decorators and the two-stage
//! render driver.
//!
//! ## Core Components
//!
//! - **HtmlClient**: the component contract (`prepare`, `body`,
//!   `subclients`); decorators implement it too and stay invisible to
//!   callers.
//! - **ClientBase**: the recurring component behavior, delegated to
//!   explicitly instead of inherited.
//! - **ClientRegistry**: path + variant to factory resolution, decorator
//!   wrapping, built once at startup.
//! - **render**: drives `prepare` over the whole tree, then `body`, and
//!   returns the markup with its aggregated cache metadata.

pub mod base;
pub mod client;
pub mod decorator;
pub mod error;
pub mod path;
pub mod registry;
pub mod render;

#[cfg(test)]
pub(crate) mod testutil;

pub use base::ClientBase;
pub use client::{BoxedClient, HtmlClient};
pub use decorator::{decorator_chain, Container, Timing};
pub use error::RenderError;
pub use path::ClientPath;
pub use registry::{ClientRegistry, RegistryBuilder};
pub use render::{render, Rendered};
