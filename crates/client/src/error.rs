//! Error type for the composition core.

use thiserror::Error;
use vitrine_traits::{LinkError, PdfError, TemplateError};
use vitrine_view::{BlockError, ConfigError, ViewError};

/// Errors from assembling and rendering a component tree.
///
/// Configuration mistakes (unknown client or decorator names, malformed
/// lists) fail fast when the tree is assembled; data problems surface from
/// the component that hit them and abort that subtree's render. What to do
/// with a failed page is the caller's policy.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unknown client '{path}' (variant '{variant}')")]
    UnknownClient { path: String, variant: String },

    #[error("Unknown decorator '{0}'")]
    UnknownDecorator(String),

    /// A collaborator the component needs was never installed, e.g. the
    /// PDF renderer or the outgoing message on the view.
    #[error("Missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error(transparent)]
    Block(#[from] BlockError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Link(#[from] LinkError),

    #[error(transparent)]
    Pdf(#[from] PdfError),
}
