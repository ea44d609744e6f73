use crate::extract::PdfError;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
///
/// Every variant renders as `{ "error": <message> }`. Extraction failures
/// pass the underlying message through to the client unredacted.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The multipart body carried no file under the expected field
    #[error("No file uploaded")]
    MissingFile,

    #[error("Only image files and PDF files are allowed (got {0})")]
    UnsupportedMediaType(String),

    #[error("File too large: max {0}MB allowed")]
    PayloadTooLarge(usize),

    #[error("Invalid multipart request: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Failed to process PDF: {0}")]
    Pdf(#[from] PdfError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::MissingFile => StatusCode::BAD_REQUEST,
            ServerError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ServerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            // Multipart rejections keep their own status (400 for malformed
            // bodies, 413 when the body cap cut the read short)
            ServerError::Multipart(err) => err.status(),
            ServerError::Pdf(_) | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ServerError::MissingFile.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ServerError::UnsupportedMediaType("text/plain".into()).status_code(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            ServerError::PayloadTooLarge(10).status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ServerError::Pdf(PdfError::Unavailable).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_missing_file_body_shape() {
        let response = ServerError::MissingFile.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "No file uploaded" }));
    }
}
