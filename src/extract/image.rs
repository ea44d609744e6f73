//! Base64 image encoding
//!
//! The image path performs no decoding or validation: the bytes are encoded
//! as-is and the declared MIME type travels along unchanged. Base64 is defined
//! for arbitrary byte sequences, so this operation is total.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;

/// A base64-encoded image, paired with its declared MIME type
#[derive(Debug, Serialize)]
pub struct ImageEncoding {
    pub base64: String,

    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

/// Encode an uploaded image buffer for the JSON response
pub fn encode(bytes: &[u8], mime_type: &str) -> ImageEncoding {
    ImageEncoding {
        base64: STANDARD.encode(bytes),
        mime_type: mime_type.to_string(),
    }
}
