//! Upload classification and extraction
//!
//! An uploaded file is classified purely on its declared MIME type and routed
//! to one of two extractors:
//!
//! - `pdf`: parses the buffer as a PDF and pulls text, page count, metadata
//! - `image`: base64-encodes the buffer as-is (total, never fails)
//!
//! The acceptor guarantees that only `application/pdf` or `image/*` uploads
//! ever reach [`process_upload`], so the dispatch is two-way exhaustive.

pub mod image;
pub mod pdf;

pub use image::ImageEncoding;
pub use pdf::{PdfEngine, PdfError, PdfExtraction};

use bytes::Bytes;
use serde::Serialize;

/// The one MIME type routed to the PDF extractor
pub const PDF_MIME: &str = "application/pdf";

/// A single uploaded file, buffered whole in memory for one request
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Declared MIME type, `application/pdf` or `image/*` past the acceptor
    pub mime_type: String,

    /// The complete file contents
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_pdf(&self) -> bool {
        self.mime_type == PDF_MIME
    }
}

/// Whether a declared MIME type is allowed through the upload acceptor
pub fn accepted_mime_type(mime_type: &str) -> bool {
    mime_type == PDF_MIME || mime_type.starts_with("image/")
}

/// Result of processing one upload, tagged for the JSON response
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Extraction {
    Pdf(PdfExtraction),
    Image(ImageEncoding),
}

/// Route a buffered upload to the extractor its MIME type selects
pub fn process_upload(engine: &PdfEngine, file: &UploadedFile) -> Result<Extraction, PdfError> {
    if file.is_pdf() {
        Ok(Extraction::Pdf(engine.extract(&file.bytes)?))
    } else {
        Ok(Extraction::Image(image::encode(&file.bytes, &file.mime_type)))
    }
}
