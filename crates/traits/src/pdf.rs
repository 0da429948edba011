//! PDF rendering boundary.
//!
//! Components that produce PDF output depend on this trait only. The
//! concrete renderer lives in its own crate and is installed as a service
//! at bootstrap, so the component tree stays free of PDF library types.

use std::fmt::Debug;

use thiserror::Error;

/// Errors that can occur while rendering HTML to PDF.
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Invalid HTML input: {0}")]
    InvalidHtml(String),

    #[error("PDF generation failed: {0}")]
    Generation(String),
}

/// A trait for rendering an HTML document into a PDF byte stream.
pub trait PdfRenderer: Send + Sync + Debug {
    /// Renders the given HTML document and returns the PDF file bytes.
    fn render(&self, html: &str) -> Result<Vec<u8>, PdfError>;

    /// Returns the name of this renderer for logging.
    fn name(&self) -> &'static str;
}
