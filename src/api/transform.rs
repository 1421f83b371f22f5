use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use stroke_raster::{BoundingBox, RasterError, Stroke};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::RenderService;

/// Request body for stroke transformation
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TransformRequest {
    /// Strokes in drawing order, each `[[x0, x1, ...], [y0, y1, ...]]`
    #[schema(value_type = Vec<Vec<Vec<f64>>>)]
    pub strokes: Vec<(Vec<f64>, Vec<f64>)>,

    /// Crop box `[x_min, y_min, x_max, y_max]`. When omitted, a square box
    /// is fitted around the strokes.
    #[serde(rename = "box", default)]
    #[schema(value_type = Option<Vec<f64>>, min_items = 4, max_items = 4)]
    pub bbox: Option<[f64; 4]>,
}

impl TransformRequest {
    /// Convert to renderer input, fitting a box with `padding` if none was sent
    pub fn into_parts(self, padding: f64) -> Result<(Vec<Stroke>, BoundingBox), RasterError> {
        let strokes: Vec<Stroke> = self.strokes.into_iter().map(Stroke::from).collect();
        let bbox = match self.bbox {
            Some(values) => BoundingBox::from(values),
            None => BoundingBox::fit_square(&strokes, padding)?,
        };
        Ok((strokes, bbox))
    }
}

/// Error body returned for rejected requests
#[derive(Debug, Serialize, ToSchema)]
pub struct TransformErrorResponse {
    /// HTTP status code
    pub status: u16,
    /// Error message
    pub error: String,
}

/// Render strokes to a classifier-sized image
///
/// Draws every stroke as a black 3px polyline on a white canvas cropped to
/// `box`, downsamples it to 28×28 and returns the PNG.
#[utoipa::path(
    post,
    path = "/transform",
    request_body = TransformRequest,
    responses(
        (status = 200, description = "Rendered 28x28 PNG image", content_type = "image/png"),
        (status = 400, description = "Malformed JSON body or nothing to fit a box around", body = TransformErrorResponse),
        (status = 413, description = "Body or canvas too large", body = TransformErrorResponse),
        (status = 422, description = "Malformed stroke or invalid bounding box", body = TransformErrorResponse),
    ),
    tag = "Transform"
)]
pub async fn handle_transform(
    State(config): State<Arc<AppConfig>>,
    State(renderer): State<Arc<RenderService>>,
    payload: Result<Json<TransformRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    let explicit_box = request.bbox.is_some();

    let (strokes, bbox) = request.into_parts(config.render.crop_padding)?;

    tracing::info!(
        strokes = strokes.len(),
        points = strokes.iter().map(Stroke::len).sum::<usize>(),
        bbox = ?bbox.to_array(),
        fitted = !explicit_box,
        "Transform request received"
    );

    let png_bytes = renderer.render_png(strokes, bbox).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        Bytes::from(png_bytes),
    )
        .into_response())
}
