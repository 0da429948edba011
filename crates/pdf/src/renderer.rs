//! Printable HTML to PDF composition with lopdf.

use chrono::Utc;
use log::debug;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};
use vitrine_traits::{PdfError, PdfRenderer};

use crate::extract::{DocumentText, extract_text};

// A4 portrait in points.
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 50;
const FONT_SIZE: i64 = 10;
const TITLE_SIZE: i64 = 14;
const LEADING: i64 = 14;

/// The standard [`PdfRenderer`]: one Helvetica text column on A4 pages,
/// block-level markup mapped to lines.
///
/// Good enough for order documents attached to e-mails; anything that
/// needs real layout belongs behind a different renderer implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfRenderer;

impl LopdfRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl PdfRenderer for LopdfRenderer {
    fn render(&self, html: &str) -> Result<Vec<u8>, PdfError> {
        let text = extract_text(html)?;
        debug!(
            "Rendering PDF: {} lines, title {:?}",
            text.lines.len(),
            text.title
        );
        compose(&text)
    }

    fn name(&self) -> &'static str {
        "lopdf"
    }
}

fn compose(text: &DocumentText) -> Result<Vec<u8>, PdfError> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut lines: Vec<(&str, i64)> = Vec::new();
    if let Some(title) = &text.title {
        lines.push((title.as_str(), TITLE_SIZE));
    }
    for line in &text.lines {
        lines.push((line.as_str(), FONT_SIZE));
    }
    if lines.is_empty() {
        lines.push(("", FONT_SIZE));
    }

    let lines_per_page = ((PAGE_HEIGHT - 2 * MARGIN) / LEADING) as usize;
    let mut page_ids: Vec<Object> = Vec::new();

    for chunk in lines.chunks(lines_per_page) {
        let mut operations = Vec::new();
        let mut y = PAGE_HEIGHT - MARGIN;
        for (line, size) in chunk {
            y -= LEADING;
            if line.is_empty() {
                continue;
            }
            operations.extend([
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), (*size).into()]),
                Operation::new("Td", vec![MARGIN.into(), y.into()]),
                Operation::new(
                    "Tj",
                    vec![Object::String(encode_literal(line), StringFormat::Literal)],
                ),
                Operation::new("ET", vec![]),
            ]);
        }

        let encoded = Content { operations }
            .encode()
            .map_err(|e| PdfError::Generation(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        page_ids.push(page_id.into());
    }

    let count = page_ids.len() as i64;
    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => count,
        }
        .into(),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut info = dictionary! {
        "Producer" => Object::string_literal("vitrine"),
        "CreationDate" => Object::string_literal(Utc::now().format("D:%Y%m%d%H%M%SZ").to_string()),
    };
    if let Some(title) = &text.title {
        info.set("Title", Object::String(encode_literal(title), StringFormat::Literal));
    }
    let info_id = doc.add_object(info);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| PdfError::Generation(e.to_string()))?;
    Ok(bytes)
}

/// Encodes text for a PDF literal string: backslash escapes plus a lossy
/// Latin-1 mapping matching the Helvetica base encoding.
fn encode_literal(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '(' | ')' => {
                out.push(b'\\');
                out.push(c as u8);
            }
            c if (c as u32) < 0x100 => out.push(c as u8),
            _ => out.push(b'?'),
        }
    }
    out
}
