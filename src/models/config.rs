use crate::assets::AssetLoader;
use serde::Deserialize;
use stroke_raster::{validate_padding, LineCap, LineJoin, RasterError, RenderOptions, ResizeFilter};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Pen and resampling settings for the stroke renderer
    pub render: RenderConfig,

    /// Encoding of the returned image
    pub output: OutputConfig,

    /// HTTP limits
    pub server: ServerConfig,
}

/// Renderer settings, mapped onto [`RenderOptions`]
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Pen width on the full-resolution canvas, in pixels
    pub stroke_width: f32,

    /// Side length of the square output image
    pub output_size: u32,

    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub anti_alias: bool,
    pub filter: ResizeFilter,

    /// Largest accepted canvas side (bounding box extent)
    pub max_canvas_side: u32,

    /// Padding used when a request omits the box and one is fitted around the strokes
    pub crop_padding: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            stroke_width: options.stroke_width,
            output_size: options.output_size,
            line_cap: options.line_cap,
            line_join: options.line_join,
            anti_alias: options.anti_alias,
            filter: options.filter,
            max_canvas_side: options.max_canvas_side,
            crop_padding: default_crop_padding(),
        }
    }
}

fn default_crop_padding() -> f64 {
    2.0
}

impl RenderConfig {
    pub fn to_options(&self) -> RenderOptions {
        RenderOptions::new()
            .stroke_width(self.stroke_width)
            .output_size(self.output_size)
            .line_cap(self.line_cap)
            .line_join(self.line_join)
            .anti_alias(self.anti_alias)
            .filter(self.filter)
            .max_canvas_side(self.max_canvas_side)
    }

    /// Check renderer options and the crop padding
    pub fn validate(&self) -> Result<(), RasterError> {
        self.to_options().validate()?;
        validate_padding(self.crop_padding)
    }
}

/// PNG colour type of the response body
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputColor {
    /// 8-bit RGB, three identical channels
    #[default]
    Rgb,
    /// 8-bit single-channel luma
    Gray,
}

impl OutputColor {
    pub fn name(&self) -> &'static str {
        match self {
            OutputColor::Rgb => "rgb",
            OutputColor::Gray => "gray",
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub color: OutputColor,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 2 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse YAML, falling back to defaults for anything unusable
    pub fn parse(content: &str) -> Self {
        let mut config: Self = match serde_yaml::from_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                return Self::default();
            }
        };

        if let Err(e) = config.render.validate() {
            tracing::warn!(%e, "Invalid render settings, using defaults");
            config.render = RenderConfig::default();
        }

        tracing::info!(
            stroke_width = config.render.stroke_width,
            output_size = config.render.output_size,
            filter = config.render.filter.name(),
            color = config.output.color.name(),
            "Loaded configuration"
        );
        config
    }
}
