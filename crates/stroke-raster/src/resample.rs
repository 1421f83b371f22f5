//! Canvas conversion and downsampling.

use image::{imageops, RgbImage};
use tiny_skia::Pixmap;

use crate::error::RasterError;
use crate::geometry::CanvasSize;
use crate::options::ResizeFilter;
use crate::raster::RasterImage;

/// Flatten an RGBA pixmap to RGB, compositing over white.
pub(crate) fn pixmap_to_rgb(pixmap: &Pixmap) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(pixmap.width() as usize * pixmap.height() as usize * 3);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        let a = c.alpha() as u16;
        for v in [c.red(), c.green(), c.blue()] {
            rgb.push(((v as u16 * a + 255 * (255 - a)) / 255) as u8);
        }
    }
    rgb
}

/// Resample an RGB canvas to a square `output_size` image.
pub(crate) fn downsample(
    rgb: Vec<u8>,
    size: CanvasSize,
    output_size: u32,
    filter: ResizeFilter,
) -> Result<RasterImage, RasterError> {
    let expected = size.rgb_len();
    let actual = rgb.len();
    let canvas = RgbImage::from_raw(size.width, size.height, rgb)
        .ok_or(RasterError::BufferMismatch { expected, actual })?;

    let resized = imageops::resize(&canvas, output_size, output_size, filter.into());

    Ok(RasterImage::new(output_size, output_size, resized.into_raw()))
}
