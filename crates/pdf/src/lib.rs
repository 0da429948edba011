//! # Vitrine PDF
//!
//! The standard `PdfRenderer` implementation. Printable HTML goes in,
//! a simple text-layout PDF comes out, built directly with lopdf:
//! text lines extracted tag-aware from the markup, laid out as Helvetica
//! text on A4 pages.

pub mod extract;
pub mod renderer;

pub use extract::{DocumentText, extract_text};
pub use renderer::LopdfRenderer;
