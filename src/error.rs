use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use stroke_raster::RasterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON body: {0}")]
    Json(#[from] JsonRejection),

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
}

impl From<RasterError> for ApiError {
    fn from(e: RasterError) -> Self {
        ApiError::Render(RenderError::Raster(e))
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{0}")]
    Raster(#[from] RasterError),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Render task failed: {0}")]
    Task(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Json(rejection) => match rejection.status() {
                s @ (StatusCode::PAYLOAD_TOO_LARGE | StatusCode::UNSUPPORTED_MEDIA_TYPE) => s,
                _ => StatusCode::BAD_REQUEST,
            },
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Render(RenderError::Raster(e)) => raster_status(e),
            ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn raster_status(e: &RasterError) -> StatusCode {
    match e {
        RasterError::MalformedStroke { .. }
        | RasterError::InvalidGeometry { .. }
        | RasterError::NonFiniteCoordinate { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        RasterError::CanvasTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        RasterError::EmptyStrokeSet => StatusCode::BAD_REQUEST,
        RasterError::InvalidOptions(_)
        | RasterError::PixmapAllocation
        | RasterError::BufferMismatch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Render(RenderError::Raster(e)) if e.is_input_error() => e.to_string(),
            _ => self.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %message, "Request rejected");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}
