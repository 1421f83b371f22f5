//! Render options: pen shape, output size and resampling filter.

use crate::error::RasterError;

/// Side length of the output image expected by MNIST-style classifiers.
pub const DEFAULT_OUTPUT_SIZE: u32 = 28;

/// Pen width on the full-resolution canvas, in pixels.
pub const DEFAULT_STROKE_WIDTH: f32 = 3.0;

/// Largest canvas side accepted by default.
pub const DEFAULT_MAX_CANVAS_SIDE: u32 = 4096;

/// Shape drawn at the open ends of a stroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

/// Shape drawn where two segments of a stroke meet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// Interpolation filter used to downsample the canvas.
///
/// All filters are deterministic. They differ only in output pixel values;
/// the default Catmull-Rom is a bicubic filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl ResizeFilter {
    pub fn name(&self) -> &'static str {
        match self {
            ResizeFilter::Nearest => "nearest",
            ResizeFilter::Triangle => "triangle",
            ResizeFilter::CatmullRom => "catmull-rom",
            ResizeFilter::Gaussian => "gaussian",
            ResizeFilter::Lanczos3 => "lanczos3",
        }
    }
}

impl From<LineCap> for tiny_skia::LineCap {
    fn from(cap: LineCap) -> Self {
        match cap {
            LineCap::Butt => tiny_skia::LineCap::Butt,
            LineCap::Round => tiny_skia::LineCap::Round,
            LineCap::Square => tiny_skia::LineCap::Square,
        }
    }
}

impl From<LineJoin> for tiny_skia::LineJoin {
    fn from(join: LineJoin) -> Self {
        match join {
            LineJoin::Miter => tiny_skia::LineJoin::Miter,
            LineJoin::Round => tiny_skia::LineJoin::Round,
            LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
        }
    }
}

impl From<ResizeFilter> for image::imageops::FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => image::imageops::FilterType::Nearest,
            ResizeFilter::Triangle => image::imageops::FilterType::Triangle,
            ResizeFilter::CatmullRom => image::imageops::FilterType::CatmullRom,
            ResizeFilter::Gaussian => image::imageops::FilterType::Gaussian,
            ResizeFilter::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Configuration for [`StrokeRenderer`](crate::StrokeRenderer).
///
/// Configuration methods consume and return `self`:
///
/// ```
/// use stroke_raster::{LineCap, RenderOptions, ResizeFilter};
///
/// let options = RenderOptions::new()
///     .stroke_width(4.0)
///     .line_cap(LineCap::Square)
///     .filter(ResizeFilter::Triangle);
///
/// assert_eq!(options.output_size, 28);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub stroke_width: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    /// Anti-aliased pen edges. Off by default so strokes stay pure black.
    pub anti_alias: bool,
    /// Side length of the square output image.
    pub output_size: u32,
    pub filter: ResizeFilter,
    /// Upper bound on either canvas side, guards against huge allocations.
    pub max_canvas_side: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
            anti_alias: false,
            output_size: DEFAULT_OUTPUT_SIZE,
            filter: ResizeFilter::default(),
            max_canvas_side: DEFAULT_MAX_CANVAS_SIDE,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    #[inline]
    pub fn line_cap(mut self, cap: LineCap) -> Self {
        self.line_cap = cap;
        self
    }

    #[inline]
    pub fn line_join(mut self, join: LineJoin) -> Self {
        self.line_join = join;
        self
    }

    #[inline]
    pub fn anti_alias(mut self, enabled: bool) -> Self {
        self.anti_alias = enabled;
        self
    }

    #[inline]
    pub fn output_size(mut self, size: u32) -> Self {
        self.output_size = size;
        self
    }

    #[inline]
    pub fn filter(mut self, filter: ResizeFilter) -> Self {
        self.filter = filter;
        self
    }

    #[inline]
    pub fn max_canvas_side(mut self, side: u32) -> Self {
        self.max_canvas_side = side;
        self
    }

    /// Reject option combinations the renderer cannot honour.
    pub fn validate(&self) -> Result<(), RasterError> {
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(RasterError::InvalidOptions(format!(
                "stroke width must be positive, got {}",
                self.stroke_width
            )));
        }
        if self.output_size == 0 {
            return Err(RasterError::InvalidOptions(
                "output size must be at least 1".to_string(),
            ));
        }
        if self.max_canvas_side == 0 {
            return Err(RasterError::InvalidOptions(
                "max canvas side must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
