use crate::error::RenderError;
use crate::models::OutputColor;
use std::io::Cursor;
use stroke_raster::RasterImage;

/// Encode a rendered image as an 8-bit PNG.
///
/// `OutputColor::Rgb` writes three channels exactly as rendered;
/// `OutputColor::Gray` writes one luma channel.
pub fn encode_png(image: &RasterImage, color: OutputColor) -> Result<Vec<u8>, RenderError> {
    let (color_type, data): (png::ColorType, Vec<u8>) = match color {
        OutputColor::Rgb => (png::ColorType::Rgb, image.as_rgb().to_vec()),
        OutputColor::Gray => (png::ColorType::Grayscale, image.to_luma()),
    };

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&data)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
