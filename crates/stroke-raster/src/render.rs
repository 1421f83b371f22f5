//! The stroke renderer.

use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Transform};

use crate::error::RasterError;
use crate::geometry::{BoundingBox, CanvasSize};
use crate::options::RenderOptions;
use crate::raster::RasterImage;
use crate::resample::{downsample, pixmap_to_rgb};
use crate::stroke::Stroke;

/// Draws stroke sets onto a canvas cropped to a bounding box and downsamples
/// the result.
///
/// The renderer holds only its options; [`render()`](Self::render) takes
/// `&self` so one instance can serve any number of calls, from any thread.
///
/// ```
/// use stroke_raster::{BoundingBox, RenderOptions, Stroke, StrokeRenderer};
///
/// let renderer = StrokeRenderer::new(RenderOptions::new().output_size(16));
/// let image = renderer
///     .render(&[], &BoundingBox::new(0.0, 0.0, 50.0, 50.0))
///     .unwrap();
///
/// assert_eq!(image.width(), 16);
/// assert!(image.is_blank());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StrokeRenderer {
    options: RenderOptions,
}

impl StrokeRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `strokes` cropped to `bbox`.
    ///
    /// Geometry is checked first, then every stroke, and only then is the
    /// canvas allocated. Strokes with fewer than two points draw nothing.
    pub fn render(
        &self,
        strokes: &[Stroke],
        bbox: &BoundingBox,
    ) -> Result<RasterImage, RasterError> {
        self.options.validate()?;
        let size = bbox.canvas_size(self.options.max_canvas_side)?;
        for (index, stroke) in strokes.iter().enumerate() {
            stroke.validate(index)?;
        }

        let canvas = self.draw(strokes, bbox, size)?;
        downsample(
            pixmap_to_rgb(&canvas),
            size,
            self.options.output_size,
            self.options.filter,
        )
    }

    fn draw(
        &self,
        strokes: &[Stroke],
        bbox: &BoundingBox,
        size: CanvasSize,
    ) -> Result<Pixmap, RasterError> {
        let mut pixmap = Pixmap::new(size.width, size.height).ok_or(RasterError::PixmapAllocation)?;
        pixmap.fill(Color::WHITE);

        let mut paint = Paint::default();
        paint.set_color(Color::BLACK);
        paint.anti_alias = self.options.anti_alias;

        let pen = tiny_skia::Stroke {
            width: self.options.stroke_width,
            line_cap: self.options.line_cap.into(),
            line_join: self.options.line_join.into(),
            ..Default::default()
        };

        // Crop: box origin becomes canvas origin
        let transform = Transform::from_translate(-bbox.x_min as f32, -bbox.y_min as f32);

        for stroke in strokes.iter().filter(|s| s.has_segment()) {
            let mut points = stroke.points();
            let mut builder = PathBuilder::new();
            if let Some((x, y)) = points.next() {
                builder.move_to(x as f32, y as f32);
            }
            for (x, y) in points {
                builder.line_to(x as f32, y as f32);
            }
            if let Some(path) = builder.finish() {
                pixmap.stroke_path(&path, &paint, &pen, transform, None);
            }
        }

        Ok(pixmap)
    }
}

/// Render with default options: 3px round pen, 28×28 output.
pub fn render(strokes: &[Stroke], bbox: &BoundingBox) -> Result<RasterImage, RasterError> {
    StrokeRenderer::default().render(strokes, bbox)
}
