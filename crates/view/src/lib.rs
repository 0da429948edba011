//! # Vitrine View
//!
//! Request-scoped rendering context for the vitrine component tree.
//!
//! ## Core Components
//!
//! - **View**: per-request data carrier with slots, request parameters and
//!   accessors for the shared services (templates, translation, links).
//! - **BlockRegistry**: named capture buffers that relocate markup between
//!   templates within one render pass.
//! - **CacheMeta**: cache tags and expiry aggregated bottom-up over the tree.
//! - **Config**: JSON-backed configuration with slash-separated keys.
//! - **Services**: the immutable collaborator bundle built once at startup.

pub mod blocks;
pub mod cache;
pub mod config;
pub mod encoder;
pub mod params;
pub mod services;
pub mod view;

pub use blocks::{BlockError, BlockRegistry};
pub use cache::CacheMeta;
pub use config::{Config, ConfigError};
pub use encoder::{Encoder, Trust};
pub use params::Params;
pub use services::{Services, ServicesBuilder};
pub use view::{View, ViewError};
