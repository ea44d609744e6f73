use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::extract::{self, UploadedFile};
use crate::state::ServerState;
use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;

/// Multipart field name the file must arrive under
const UPLOAD_FIELD: &str = "pdf";

/// `POST /api/process-pdf`
///
/// Accepts one file (image or PDF) as multipart form data and returns the
/// extraction result:
///
/// ```json
/// { "type": "pdf", "text": "...", "pages": 1, "info": { "Title": "..." } }
/// { "type": "image", "base64": "...", "mimeType": "image/png" }
/// ```
///
/// # Errors
///
/// - 400 `{ "error": "No file uploaded" }` when no `pdf` field is present
/// - 415 when the declared type is neither `application/pdf` nor `image/*`
/// - 413 when the file exceeds the configured upload ceiling
/// - 500 `{ "error": ... }` when PDF extraction fails or is unavailable
pub async fn process_file(
    State(state): State<Arc<ServerState>>,
    mut multipart: Multipart,
) -> ServerResult<impl IntoResponse> {
    let file = read_upload(&state.config, &mut multipart).await?;

    tracing::debug!(
        mime_type = %file.mime_type,
        size_bytes = file.size(),
        "processing upload"
    );

    let extraction = extract::process_upload(&state.pdf, &file)?;
    Ok(Json(extraction))
}

/// Upload acceptor: find the `pdf` field, validate its declared type, and
/// buffer it whole
///
/// The type filter runs on the part headers, before any of the file body is
/// buffered. Non-file form fields and files under other names are skipped.
async fn read_upload(
    config: &ServerConfig,
    multipart: &mut Multipart,
) -> ServerResult<UploadedFile> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        if !extract::accepted_mime_type(&mime_type) {
            return Err(ServerError::UnsupportedMediaType(mime_type));
        }

        let bytes = field.bytes().await?;
        if bytes.len() > config.max_upload_size() {
            return Err(ServerError::PayloadTooLarge(config.max_upload_size_mb));
        }

        return Ok(UploadedFile { mime_type, bytes });
    }

    Err(ServerError::MissingFile)
}
