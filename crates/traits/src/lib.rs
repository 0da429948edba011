//! Collaborator interfaces for the vitrine rendering core.
//!
//! The composition core assembles HTML from component trees; everything it
//! needs from the outside world (template rendering, translation, link
//! building, PDF generation, the outgoing e-mail message) is consumed
//! through the traits in this crate. Each trait ships with a simple
//! standard implementation so the core is usable and testable without
//! wiring a full platform.
//!
//! ## Interfaces
//!
//! - [`TemplateEngine`]: renders a registered template against JSON data
//! - [`Translator`]: looks up translated strings per domain
//! - [`LinkBuilder`]: builds absolute shop URLs
//! - [`PdfRenderer`]: turns printable HTML into PDF bytes
//! - [`AttachmentSink`]: receives binary attachments for an outgoing message

pub mod links;
pub mod mail;
pub mod pdf;
pub mod template;
pub mod translate;

pub use links::{BaseUrlLinks, LinkBuilder, LinkError};
pub use mail::{Attachment, AttachmentSink, EmailMessage};
pub use pdf::{PdfError, PdfRenderer};
pub use template::{StaticTemplates, TemplateEngine, TemplateError};
pub use translate::{MapTranslator, Translator};
