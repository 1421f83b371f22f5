//! Bounding boxes and canvas sizing.

use crate::error::RasterError;
use crate::stroke::Stroke;

/// Crop region in stroke coordinate space.
///
/// The box selects which part of the drawing ends up in the output image.
/// Its size (rounded down to whole pixels) is also the size of the
/// full-resolution canvas strokes are drawn onto before downsampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

/// Pixel dimensions of the full-resolution canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// Number of bytes an RGB buffer of this size occupies.
    #[inline]
    pub fn rgb_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }
}

impl BoundingBox {
    pub const fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Values in wire order: `[x_min, y_min, x_max, y_max]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.x_min, self.y_min, self.x_max, self.y_max]
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Whether `(x, y)` lies inside the box, edges included.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    /// Canvas dimensions for this box.
    ///
    /// Each side is `floor(max - min)`. A side that rounds down to zero, a
    /// negative extent, or any non-finite value is [`RasterError::InvalidGeometry`].
    /// Sides larger than `max_side` are [`RasterError::CanvasTooLarge`].
    pub fn canvas_size(&self, max_side: u32) -> Result<CanvasSize, RasterError> {
        let width = self.width().floor();
        let height = self.height().floor();

        let finite = self.to_array().iter().all(|v| v.is_finite());
        if !finite || !(width >= 1.0 && height >= 1.0) {
            return Err(RasterError::InvalidGeometry {
                width: self.width(),
                height: self.height(),
            });
        }

        if width > max_side as f64 || height > max_side as f64 {
            return Err(RasterError::CanvasTooLarge {
                width: width as u64,
                height: height as u64,
                max: max_side,
            });
        }

        Ok(CanvasSize {
            width: width as u32,
            height: height as u32,
        })
    }

    /// Square crop box enclosing every point of `strokes`.
    ///
    /// The tight extents are widened by `padding` on the low side (clamped
    /// at zero) and the box is made square using the longer of the two
    /// extents plus `padding` on both sides. This matches how drawing clients
    /// crop a doodle before asking for a classifier-sized image.
    ///
    /// `padding` must be finite and non-negative, otherwise the result
    /// would not enclose the strokes; anything else is
    /// [`RasterError::InvalidOptions`].
    pub fn fit_square(strokes: &[Stroke], padding: f64) -> Result<Self, RasterError> {
        validate_padding(padding)?;

        let mut extents: Option<(f64, f64, f64, f64)> = None;

        for (index, stroke) in strokes.iter().enumerate() {
            stroke.validate(index)?;
            for (x, y) in stroke.points() {
                extents = Some(match extents {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }

        let (x0, y0, x1, y1) = extents.ok_or(RasterError::EmptyStrokeSet)?;
        let side = (x1 - x0).max(y1 - y0) + 2.0 * padding;
        let x_min = (x0 - padding).max(0.0);
        let y_min = (y0 - padding).max(0.0);

        Ok(Self::new(x_min, y_min, x_min + side, y_min + side))
    }
}

/// Check a crop padding value for [`BoundingBox::fit_square`].
pub fn validate_padding(padding: f64) -> Result<(), RasterError> {
    if !padding.is_finite() || padding < 0.0 {
        return Err(RasterError::InvalidOptions(format!(
            "crop padding must be finite and non-negative, got {padding}"
        )));
    }
    Ok(())
}

impl From<[f64; 4]> for BoundingBox {
    fn from([x_min, y_min, x_max, y_max]: [f64; 4]) -> Self {
        Self::new(x_min, y_min, x_max, y_max)
    }
}
