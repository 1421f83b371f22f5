pub mod config;

pub use config::{AppConfig, OutputColor, OutputConfig, RenderConfig, ServerConfig};
