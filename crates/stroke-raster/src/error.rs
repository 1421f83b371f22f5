//! Error type for stroke validation and rendering.

use thiserror::Error;

/// Everything that can go wrong between raw stroke data and a raster image.
///
/// All variants are caused by bad input except [`RasterError::PixmapAllocation`]
/// and [`RasterError::BufferMismatch`], which indicate resource exhaustion or
/// an internal inconsistency.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RasterError {
    /// A stroke's x and y sequences differ in length.
    #[error("Malformed stroke {index}: {xs} x-coordinates but {ys} y-coordinates")]
    MalformedStroke { index: usize, xs: usize, ys: usize },

    /// The bounding box has non-positive (or sub-pixel) width or height.
    #[error("Invalid bounding box geometry: {width}x{height}")]
    InvalidGeometry { width: f64, height: f64 },

    /// A stroke contains NaN, infinite or out-of-range coordinates.
    #[error("Stroke {index} contains a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    /// The canvas implied by the bounding box exceeds the configured limit.
    #[error("Canvas too large: {width}x{height} (max side {max})")]
    CanvasTooLarge { width: u64, height: u64, max: u32 },

    /// A bounding box was requested for a stroke set without any points.
    #[error("Stroke set contains no points")]
    EmptyStrokeSet,

    /// Render options are out of range.
    #[error("Invalid render options: {0}")]
    InvalidOptions(String),

    #[error("Failed to allocate canvas")]
    PixmapAllocation,

    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferMismatch { expected: usize, actual: usize },
}

impl RasterError {
    /// Whether the error was caused by the caller's input rather than the
    /// renderer itself.
    pub fn is_input_error(&self) -> bool {
        !matches!(
            self,
            RasterError::PixmapAllocation | RasterError::BufferMismatch { .. }
        )
    }
}
