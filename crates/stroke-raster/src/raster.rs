//! The rendered output image.

/// A small RGB image produced by the renderer.
///
/// Pixels are stored row-major as `[R, G, B, R, G, B, ...]`. Strokes are
/// drawn in black on white, so every pixel is a shade of grey; the RGB layout
/// is kept so the image can be handed to consumers expecting three channels.
///
/// ```
/// use stroke_raster::RasterImage;
///
/// let image = RasterImage::blank(2, 2);
/// assert!(image.is_blank());
/// assert_eq!(image.pixel(1, 1), [255, 255, 255]);
/// assert_eq!(image.to_luma().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Wrap an RGB buffer.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height * 3`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * 3,
            "pixel buffer length ({}) must match {}x{}x3",
            pixels.len(),
            width,
            height,
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// An all-white image.
    pub fn blank(width: u32, height: u32) -> Self {
        Self::new(width, height, vec![255; width as usize * height as usize * 3])
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn as_rgb(&self) -> &[u8] {
        &self.pixels
    }

    /// RGB value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        let i = (y as usize * self.width as usize + x as usize) * 3;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// Luma at `(x, y)` using ITU-R 601 weights.
    pub fn luma(&self, x: u32, y: u32) -> u8 {
        let [r, g, b] = self.pixel(x, y);
        luma(r, g, b)
    }

    /// Single-channel copy of the image, one byte per pixel.
    pub fn to_luma(&self) -> Vec<u8> {
        self.pixels
            .chunks_exact(3)
            .map(|p| luma(p[0], p[1], p[2]))
            .collect()
    }

    /// True when no pixel differs from pure white.
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&v| v == 255)
    }

    /// Number of pixels whose luma is below `threshold`.
    pub fn count_darker_than(&self, threshold: u8) -> usize {
        self.pixels
            .chunks_exact(3)
            .filter(|p| luma(p[0], p[1], p[2]) < threshold)
            .count()
    }
}

#[inline]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 299 + g as u32 * 587 + b as u32 * 114 + 500) / 1000) as u8
}
