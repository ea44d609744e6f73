//! PDF text and metadata extraction
//!
//! Backed by `lopdf`: one in-memory parse yields the page tree, the content
//! streams for text extraction, and the trailer's `Info` dictionary. No OCR
//! is performed, so scanned image-only documents extract to an empty string.
//!
//! The capability is resolved once at startup into a [`PdfEngine`]; a server
//! running with the engine disabled fails every PDF upload with the same
//! descriptive error instead of parsing anything.

use lopdf::{Document, Object};
use serde::Serialize;
use std::collections::BTreeMap;

/// Errors from the PDF extraction path
#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("PDF processing is not available on this server")]
    Unavailable,

    #[error("document is encrypted")]
    Encrypted,

    #[error("document has no pages")]
    NoPages,

    #[error("invalid PDF: {0}")]
    Parse(#[from] lopdf::Error),

    #[error("text extraction failed: {0}")]
    Text(lopdf::Error),
}

/// Extraction result for one PDF document
///
/// `info` holds only the metadata fields actually present in the document's
/// `Info` dictionary; absent fields are omitted, never defaulted.
#[derive(Debug, Serialize)]
pub struct PdfExtraction {
    pub text: String,
    pub pages: usize,
    pub info: BTreeMap<String, String>,
}

/// The PDF extraction capability, fixed for the process lifetime
#[derive(Debug, Clone, Copy)]
pub enum PdfEngine {
    Enabled,
    Disabled,
}

impl PdfEngine {
    /// Extract text, page count, and metadata from a buffered PDF
    pub fn extract(&self, bytes: &[u8]) -> Result<PdfExtraction, PdfError> {
        match self {
            PdfEngine::Enabled => extract(bytes),
            PdfEngine::Disabled => Err(PdfError::Unavailable),
        }
    }
}

fn extract(bytes: &[u8]) -> Result<PdfExtraction, PdfError> {
    let doc = Document::load_mem(bytes)?;

    if doc.is_encrypted() {
        return Err(PdfError::Encrypted);
    }

    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    if page_numbers.is_empty() {
        // A structurally valid document carries at least one page
        return Err(PdfError::NoPages);
    }

    let text = doc.extract_text(&page_numbers).map_err(PdfError::Text)?;
    let info = document_info(&doc);

    Ok(PdfExtraction {
        text,
        pages: page_numbers.len(),
        info,
    })
}

/// Pull the string-valued entries out of the trailer's `Info` dictionary
fn document_info(doc: &Document) -> BTreeMap<String, String> {
    let mut info = BTreeMap::new();

    let Ok(object) = doc.trailer.get(b"Info") else {
        return info;
    };
    let Some(dict) = resolve(doc, object).and_then(|o| o.as_dict().ok()) else {
        return info;
    };

    for (key, value) in dict.iter() {
        let Some(text) = resolve(doc, value).and_then(text_value) else {
            continue;
        };
        info.insert(String::from_utf8_lossy(key).into_owned(), text);
    }

    info
}

/// Follow one level of indirection; metadata values are at most one reference deep
fn resolve<'a>(doc: &'a Document, object: &'a Object) -> Option<&'a Object> {
    match object {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

fn text_value(object: &Object) -> Option<String> {
    match object {
        Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
        Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
        _ => None,
    }
}

/// Decode a PDF text string: UTF-16BE when BOM-prefixed, else treat each byte
/// as a Latin-1 code point (a superset of PDFDocEncoding's printable range)
fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = rest
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        bytes.iter().map(|&b| b as char).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Stream};

    /// Build a one-page PDF whose only content is `text`, with Title/Author
    /// metadata in the Info dictionary
    fn one_page_pdf(text: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content stream"),
        ));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal("Test Document"),
            "Author" => Object::string_literal("docdrop"),
        });
        doc.trailer.set("Info", info_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("serialize test PDF");
        bytes
    }

    #[test]
    fn test_extracts_text_pages_and_info() {
        let bytes = one_page_pdf("Hello World");
        let extraction = PdfEngine::Enabled.extract(&bytes).unwrap();

        assert!(extraction.text.contains("Hello World"));
        assert_eq!(extraction.pages, 1);
        assert_eq!(
            extraction.info.get("Title").map(String::as_str),
            Some("Test Document")
        );
        assert_eq!(
            extraction.info.get("Author").map(String::as_str),
            Some("docdrop")
        );
    }

    #[test]
    fn test_absent_metadata_is_omitted() {
        let bytes = one_page_pdf("anything");
        let extraction = PdfEngine::Enabled.extract(&bytes).unwrap();

        // Only the fields the fixture wrote are present
        assert!(!extraction.info.contains_key("Subject"));
        assert!(!extraction.info.contains_key("Producer"));
    }

    #[test]
    fn test_corrupt_document_fails_with_message() {
        let err = PdfEngine::Enabled
            .extract(b"%PDF-1.7 this is not a real document")
            .unwrap_err();

        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_disabled_engine_is_deterministic() {
        let bytes = one_page_pdf("Hello World");

        let first = PdfEngine::Disabled.extract(&bytes).unwrap_err();
        let second = PdfEngine::Disabled.extract(&bytes).unwrap_err();

        assert_eq!(first.to_string(), second.to_string());
        assert!(first.to_string().contains("not available"));
    }

    #[test]
    fn test_utf16_metadata_decoding() {
        // "Hé" as a BOM-prefixed UTF-16BE PDF string
        let bytes = [0xFE, 0xFF, 0x00, 0x48, 0x00, 0xE9];
        assert_eq!(decode_pdf_string(&bytes), "Hé");

        // Plain byte string, Latin-1 range
        assert_eq!(decode_pdf_string(b"Hello"), "Hello");
    }
}
