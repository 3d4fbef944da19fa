//! Minimal DOCX-to-markup conversion for inline display.
//!
//! A `.docx` file is a ZIP archive whose body lives in `word/document.xml`.
//! This converter walks that XML and emits paragraphs, headings (from
//! paragraph style ids), and bold/italic runs. Fidelity beyond that is a
//! stated non-goal; documents needing more are served through their
//! pre-rendered HTML address instead.

use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocxError {
    #[error("not a DOCX archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("archive has no word/document.xml")]
    MissingDocument,
    #[error("failed to read document body: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Convert DOCX bytes into display HTML.
pub fn docx_to_html(bytes: &[u8]) -> Result<String, DocxError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut entry = archive.by_name("word/document.xml").map_err(|err| match err {
        zip::result::ZipError::FileNotFound => DocxError::MissingDocument,
        other => DocxError::Archive(other),
    })?;
    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;
    convert_document_xml(&xml)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Map a `w:pStyle` value like `Heading2` to an HTML tag.
fn tag_for_style(style: &str) -> &'static str {
    match style {
        "Heading1" | "Title" => "h1",
        "Heading2" => "h2",
        "Heading3" => "h3",
        "Heading4" | "Heading5" | "Heading6" => "h4",
        _ => "p",
    }
}

fn attr_val(element: &BytesStart<'_>) -> Option<String> {
    element
        .attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == b"val")
        .map(|attr| String::from_utf8_lossy(&attr.value).into_owned())
}

/// Append one run chunk to the paragraph, wrapped per the active
/// formatting toggles.
fn push_run(paragraph: &mut String, chunk: &str, bold: bool, italic: bool) {
    let chunk = escape_html(chunk);
    match (bold, italic) {
        (true, true) => paragraph.push_str(&format!("<strong><em>{chunk}</em></strong>")),
        (true, false) => paragraph.push_str(&format!("<strong>{chunk}</strong>")),
        (false, true) => paragraph.push_str(&format!("<em>{chunk}</em>")),
        (false, false) => paragraph.push_str(&chunk),
    }
}

fn convert_document_xml(xml: &str) -> Result<String, DocxError> {
    let mut reader = Reader::from_str(xml);

    let mut html = String::new();
    let mut paragraph = String::new();
    let mut in_paragraph = false;
    let mut in_text = false;
    let mut in_run_props = false;
    let mut tag = "p";
    let mut bold = false;
    let mut italic = false;

    loop {
        match reader.read_event()? {
            Event::Start(element) => match element.local_name().as_ref() {
                b"p" => {
                    in_paragraph = true;
                    paragraph.clear();
                    tag = "p";
                }
                b"r" => {
                    bold = false;
                    italic = false;
                }
                b"rPr" => in_run_props = true,
                b"t" => in_text = true,
                _ => {}
            },
            Event::Empty(element) => match element.local_name().as_ref() {
                b"pStyle" => {
                    if let Some(style) = attr_val(&element) {
                        tag = tag_for_style(&style);
                    }
                }
                // <w:b/> and <w:i/> inside run properties; an explicit
                // w:val="0"/"false" turns the toggle back off.
                b"b" if in_run_props => {
                    bold = !matches!(attr_val(&element).as_deref(), Some("0" | "false"));
                }
                b"i" if in_run_props => {
                    italic = !matches!(attr_val(&element).as_deref(), Some("0" | "false"));
                }
                b"br" if in_paragraph => paragraph.push_str("<br>"),
                _ => {}
            },
            Event::Text(text) => {
                if in_paragraph && in_text {
                    let raw = String::from_utf8_lossy(text.as_ref()).into_owned();
                    push_run(&mut paragraph, &raw, bold, italic);
                }
            }
            // Entity and character references arrive as their own events,
            // not as part of the surrounding text.
            Event::GeneralRef(reference) => {
                if in_paragraph && in_text {
                    let resolved = match reference.as_ref() {
                        b"amp" => Some('&'),
                        b"lt" => Some('<'),
                        b"gt" => Some('>'),
                        b"apos" => Some('\''),
                        b"quot" => Some('"'),
                        _ => reference.resolve_char_ref()?,
                    };
                    if let Some(c) = resolved {
                        push_run(&mut paragraph, &c.to_string(), bold, italic);
                    }
                }
            }
            Event::End(element) => match element.local_name().as_ref() {
                b"p" => {
                    in_paragraph = false;
                    if !paragraph.is_empty() {
                        html.push_str(&format!("<{tag}>{paragraph}</{tag}>"));
                    }
                }
                b"t" => in_text = false,
                b"rPr" => in_run_props = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(html)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use zip::write::SimpleFileOptions;

    use super::*;

    fn docx_with_body(body_xml: &str) -> Vec<u8> {
        let document = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>{body_xml}</w:body></w:document>"#
        );
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            writer
                .start_file("word/document.xml", SimpleFileOptions::default())
                .unwrap();
            writer.write_all(document.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn converts_paragraphs_and_headings() {
        let bytes = docx_with_body(
            r#"<w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Title</w:t></w:r></w:p>
<w:p><w:r><w:t>Body text.</w:t></w:r></w:p>"#,
        );
        let html = docx_to_html(&bytes).unwrap();
        assert_eq!(html, "<h1>Title</h1><p>Body text.</p>");
    }

    #[test]
    fn bold_and_italic_runs() {
        let bytes = docx_with_body(
            r#"<w:p><w:r><w:rPr><w:b/></w:rPr><w:t>bold</w:t></w:r><w:r><w:rPr><w:i/></w:rPr><w:t>italic</w:t></w:r></w:p>"#,
        );
        let html = docx_to_html(&bytes).unwrap();
        assert_eq!(html, "<p><strong>bold</strong><em>italic</em></p>");
    }

    #[test]
    fn escapes_markup_in_text() {
        let bytes =
            docx_with_body(r#"<w:p><w:r><w:t>a &lt;b&gt; &amp; c</w:t></w:r></w:p>"#);
        let html = docx_to_html(&bytes).unwrap();
        assert_eq!(html, "<p>a &lt;b&gt; &amp; c</p>");
    }

    #[test]
    fn resolves_character_references() {
        let bytes = docx_with_body(
            r#"<w:p><w:r><w:t>It&#8217;s &#x2013; fine &quot;here&quot;</w:t></w:r></w:p>"#,
        );
        let html = docx_to_html(&bytes).unwrap();
        assert_eq!(html, "<p>It\u{2019}s \u{2013} fine &quot;here&quot;</p>");
    }

    #[test]
    fn entities_inside_formatted_runs_keep_formatting() {
        let bytes = docx_with_body(
            r#"<w:p><w:r><w:rPr><w:b/></w:rPr><w:t>A &amp; B</w:t></w:r></w:p>"#,
        );
        let html = docx_to_html(&bytes).unwrap();
        assert_eq!(html, "<p><strong>A </strong><strong>&amp;</strong><strong> B</strong></p>");
    }

    #[test]
    fn rejects_non_archives_and_missing_documents() {
        assert!(matches!(docx_to_html(b"plain text"), Err(DocxError::Archive(_))));

        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            writer.start_file("other.txt", SimpleFileOptions::default()).unwrap();
            writer.write_all(b"x").unwrap();
            writer.finish().unwrap();
        }
        assert!(matches!(
            docx_to_html(&cursor.into_inner()),
            Err(DocxError::MissingDocument)
        ));
    }
}
