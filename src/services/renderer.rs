use crate::error::RenderError;
use crate::models::{AppConfig, OutputColor};
use crate::rendering::encode_png;
use std::sync::Arc;
use stroke_raster::{BoundingBox, RasterImage, RenderOptions, Stroke, StrokeRenderer};

/// High-level render service: stroke rendering plus PNG encoding
pub struct RenderService {
    renderer: Arc<StrokeRenderer>,
    color: OutputColor,
}

impl RenderService {
    pub fn new(options: RenderOptions, color: OutputColor) -> Self {
        Self {
            renderer: Arc::new(StrokeRenderer::new(options)),
            color,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.render.to_options(), config.output.color)
    }

    pub fn options(&self) -> &RenderOptions {
        self.renderer.options()
    }

    pub fn color(&self) -> OutputColor {
        self.color
    }

    /// Render strokes to an in-memory image
    pub fn render_image(
        &self,
        strokes: &[Stroke],
        bbox: &BoundingBox,
    ) -> Result<RasterImage, RenderError> {
        Ok(self.renderer.render(strokes, bbox)?)
    }

    /// Render strokes and encode the result as PNG, on the current thread
    pub fn render_png_sync(
        &self,
        strokes: &[Stroke],
        bbox: &BoundingBox,
    ) -> Result<Vec<u8>, RenderError> {
        render_and_encode(&self.renderer, self.color, strokes, bbox)
    }

    /// Render strokes and encode the result as PNG
    ///
    /// Uses spawn_blocking to avoid blocking the async runtime during
    /// CPU-intensive rasterization and resampling.
    pub async fn render_png(
        &self,
        strokes: Vec<Stroke>,
        bbox: BoundingBox,
    ) -> Result<Vec<u8>, RenderError> {
        let renderer = self.renderer.clone();
        let color = self.color;

        tokio::task::spawn_blocking(move || render_and_encode(&renderer, color, &strokes, &bbox))
            .await
            .map_err(|e| RenderError::Task(e.to_string()))?
    }
}

impl Default for RenderService {
    fn default() -> Self {
        Self::new(RenderOptions::default(), OutputColor::default())
    }
}

fn render_and_encode(
    renderer: &StrokeRenderer,
    color: OutputColor,
    strokes: &[Stroke],
    bbox: &BoundingBox,
) -> Result<Vec<u8>, RenderError> {
    let image = renderer.render(strokes, bbox)?;
    let png = encode_png(&image, color)?;

    tracing::debug!(
        strokes = strokes.len(),
        width = image.width(),
        height = image.height(),
        bytes = png.len(),
        "Rendered strokes"
    );

    Ok(png)
}
