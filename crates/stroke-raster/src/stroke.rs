//! Pen strokes as parallel coordinate sequences.

use crate::error::RasterError;

/// One continuous pen-down to pen-up path.
///
/// Stored the way drawing clients capture it: two parallel sequences, one of
/// x-coordinates and one of y-coordinates. Point `i` is `(xs[i], ys[i])`.
/// Consecutive points are joined by straight segments.
///
/// Construction does not validate; mismatched lengths are reported by the
/// renderer together with the stroke's position in the set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stroke {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Stroke {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        Self { xs, ys }
    }

    /// Build a stroke from `(x, y)` pairs.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (xs, ys) = points.into_iter().unzip();
        Self { xs, ys }
    }

    #[inline]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[inline]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Number of complete `(x, y)` pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len().min(self.ys.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A stroke needs at least two points to produce a visible segment.
    #[inline]
    pub fn has_segment(&self) -> bool {
        self.len() >= 2
    }

    /// Points in drawing order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Check that both sequences have equal length and hold finite values.
    ///
    /// Coordinates are drawn in `f32`, so values beyond its range count as
    /// non-finite.
    ///
    /// `index` is the stroke's position in its set and is carried in the error.
    pub fn validate(&self, index: usize) -> Result<(), RasterError> {
        if self.xs.len() != self.ys.len() {
            return Err(RasterError::MalformedStroke {
                index,
                xs: self.xs.len(),
                ys: self.ys.len(),
            });
        }
        if self
            .xs
            .iter()
            .chain(self.ys.iter())
            .any(|&v| !(v as f32).is_finite())
        {
            return Err(RasterError::NonFiniteCoordinate { index });
        }
        Ok(())
    }
}

impl From<(Vec<f64>, Vec<f64>)> for Stroke {
    fn from((xs, ys): (Vec<f64>, Vec<f64>)) -> Self {
        Self::new(xs, ys)
    }
}
