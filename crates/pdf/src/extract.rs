//! Tag-aware text extraction from printable HTML.
//!
//! The order documents rendered for PDF attachment are logic-light XHTML:
//! headings, paragraphs, tables. This module reduces such a document to a
//! title and a list of text lines, which the renderer lays out as pages.

use quick_xml::Reader;
use quick_xml::events::Event;
use vitrine_traits::PdfError;

/// Text content of a printable HTML document.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DocumentText {
    pub title: Option<String>,
    pub lines: Vec<String>,
}

/// Block-level tags whose end starts a new text line.
fn breaks_line(name: &[u8]) -> bool {
    matches!(
        name,
        b"p" | b"div"
            | b"tr"
            | b"li"
            | b"table"
            | b"ul"
            | b"ol"
            | b"thead"
            | b"tbody"
            | b"tfoot"
            | b"section"
            | b"header"
            | b"footer"
            | b"h1"
            | b"h2"
            | b"h3"
            | b"h4"
            | b"h5"
            | b"h6"
    )
}

/// Extracts the line-oriented text of a printable HTML document.
///
/// The input must be well-formed markup; the printable templates emit
/// XHTML. Block-level end tags and `<br/>` break lines, text chunks within
/// one line are joined with single spaces, `<head>` content is skipped
/// except for the title, and `<style>`/`<script>` bodies are dropped.
pub fn extract_text(html: &str) -> Result<DocumentText, PdfError> {
    let mut reader = Reader::from_str(html);
    reader.config_mut().trim_text(true);

    let mut doc = DocumentText::default();
    let mut current = String::new();
    let mut in_head = false;
    let mut in_title = false;
    let mut skip_depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"head" => in_head = true,
                b"title" => in_title = true,
                b"style" | b"script" => skip_depth += 1,
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"head" => in_head = false,
                b"title" => in_title = false,
                b"style" | b"script" => skip_depth = skip_depth.saturating_sub(1),
                name if breaks_line(name) => flush(&mut current, &mut doc.lines),
                _ => {}
            },
            Ok(Event::Empty(e)) if e.name().as_ref() == b"br" => {
                flush(&mut current, &mut doc.lines);
            }
            Ok(Event::Text(t)) => {
                let text = t
                    .unescape()
                    .map_err(|e| PdfError::InvalidHtml(e.to_string()))?;
                if skip_depth > 0 {
                    continue;
                }
                if in_title {
                    let title = doc.title.get_or_insert_with(String::new);
                    if !title.is_empty() {
                        title.push(' ');
                    }
                    title.push_str(text.trim());
                } else if !in_head {
                    if !current.is_empty() {
                        current.push(' ');
                    }
                    current.push_str(text.trim());
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(PdfError::InvalidHtml(e.to_string())),
            _ => {}
        }
    }
    flush(&mut current, &mut doc.lines);

    Ok(doc)
}

fn flush(current: &mut String, lines: &mut Vec<String>) {
    let line = current.trim();
    if !line.is_empty() {
        lines.push(line.to_string());
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_become_lines() {
        let doc = extract_text("<div><p>Dear customer,</p><p>thank you.</p></div>").unwrap();
        assert_eq!(doc.lines, vec!["Dear customer,", "thank you."]);
        assert_eq!(doc.title, None);
    }

    #[test]
    fn test_table_rows_join_cells_with_spaces() {
        let html = "<table>\
            <tr><td>Summer dress</td><td>2</td><td>59.90 EUR</td></tr>\
            <tr><td>Total</td><td></td><td>59.90 EUR</td></tr>\
            </table>";
        let doc = extract_text(html).unwrap();
        assert_eq!(doc.lines, vec!["Summer dress 2 59.90 EUR", "Total 59.90 EUR"]);
    }

    #[test]
    fn test_title_is_captured_and_head_skipped() {
        let html = "<html><head><title>Order 1234</title></head>\
            <body><p>Hello</p></body></html>";
        let doc = extract_text(html).unwrap();
        assert_eq!(doc.title.as_deref(), Some("Order 1234"));
        assert_eq!(doc.lines, vec!["Hello"]);
    }

    #[test]
    fn test_br_breaks_lines_and_entities_unescape() {
        let doc = extract_text("<p>Shoes &amp; socks<br/>in stock</p>").unwrap();
        assert_eq!(doc.lines, vec!["Shoes & socks", "in stock"]);
    }

    #[test]
    fn test_style_content_is_dropped() {
        let doc = extract_text("<div><style>p { color: red }</style><p>Visible</p></div>").unwrap();
        assert_eq!(doc.lines, vec!["Visible"]);
    }

    #[test]
    fn test_mismatched_markup_is_rejected() {
        let err = extract_text("<p>broken</div>").unwrap_err();
        assert!(matches!(err, PdfError::InvalidHtml(_)));
    }
}
