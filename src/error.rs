use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Request failures visible to clients.
///
/// Every variant renders as HTTP 400 with a body of
/// `{"error": "<message>"}`. The messages are part of the wire contract
/// and must stay stable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request body had no `image` field.
    #[error("no image data provided")]
    MissingImage,

    /// The payload was not valid base64, or the bytes were not a
    /// decodable image, or the image had no pixels.
    #[error("invalid image data")]
    InvalidImage,

    /// Isolation produced a frame the extractor could not use.
    #[error("no isolable region found")]
    EmptyRegion,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
