use axum::Json;
use axum::extract::State;
use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::AppState;
use crate::error::ApiError;

/// Request body for `POST /detect-color`.
#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    /// Base64 of an encoded image. Optional so a missing field maps to
    /// the error contract instead of a deserialization reject.
    #[serde(default)]
    pub image: Option<String>,
}

/// Success body: the dominant color of the isolated object.
#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub color: String,
}

/// Isolates the dominant object in the posted image and reports its
/// color as `#rrggbb`.
///
/// The pixel work is CPU-bound and runs on tokio's blocking pool.
pub async fn detect_color(
    State(state): State<AppState>,
    Json(request): Json<DetectRequest>,
) -> Result<Json<DetectResponse>, ApiError> {
    let encoded = request.image.ok_or(ApiError::MissingImage)?;
    // Clients line-wrap or newline-terminate base64; whitespace is not
    // part of the payload.
    let compact: Vec<u8> = encoded
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let bytes = general_purpose::STANDARD.decode(compact).map_err(|err| {
        debug!(%err, "base64 decode failed");
        ApiError::InvalidImage
    })?;

    let isolator = state.isolator.clone();
    let color = tokio::task::spawn_blocking(move || extract_color(&isolator, &bytes))
        .await
        .map_err(|err| {
            debug!(%err, "pixel worker failed");
            ApiError::InvalidImage
        })??;

    Ok(Json(DetectResponse { color }))
}

fn extract_color(isolator: &tinct_core::Isolator, bytes: &[u8]) -> Result<String, ApiError> {
    let frame = tinct_core::codec::decode(bytes).map_err(|err| {
        debug!(%err, "image decode failed");
        ApiError::InvalidImage
    })?;

    let isolated = isolator.isolate(&frame);

    let png = tinct_core::codec::encode_png(&isolated).map_err(|err| {
        debug!(%err, "png encode failed");
        ApiError::EmptyRegion
    })?;
    let rgb = tinct_palette::dominant_color(&png).map_err(|err| {
        debug!(%err, "palette extraction failed");
        ApiError::EmptyRegion
    })?;

    let color = tinct_palette::hex(rgb);
    debug!(%color, width = frame.width, height = frame.height, "detected color");
    Ok(color)
}
