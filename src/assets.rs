//! Asset loading with embedded fallbacks
//!
//! The drawing site and the default config are compiled into the binary.
//!
//! - `STATIC_DIR` unset: the embedded site is served
//! - `STATIC_DIR` set: files are served from that directory instead
//! - `CONFIG_FILE` unset: the embedded `config.yaml` is used
//! - `CONFIG_FILE` set: that file is read

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ApiError;

/// Embedded drawing site
#[derive(RustEmbed)]
#[folder = "static/"]
struct EmbeddedStatic;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

const CONFIG_FILE_NAME: &str = "config.yaml";
const INDEX_FILE_NAME: &str = "index.html";

/// Asset categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Static,
    Config,
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override
#[derive(Debug, Clone, Default)]
pub struct AssetLoader {
    /// External static site directory (from STATIC_DIR env var)
    static_dir: Option<PathBuf>,
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the corresponding env var was set.
    /// If `None`, embedded assets are used exclusively.
    pub fn new(static_dir: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            static_dir,
            config_file,
        }
    }

    /// Build a loader from `STATIC_DIR` and `CONFIG_FILE`
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("STATIC_DIR").ok().map(PathBuf::from),
            std::env::var("CONFIG_FILE").ok().map(PathBuf::from),
        )
    }

    pub fn static_dir(&self) -> Option<&Path> {
        self.static_dir.as_deref()
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Human-readable origin of the static site, for logging
    pub fn static_source(&self) -> String {
        describe(self.static_dir())
    }

    /// Human-readable origin of the config, for logging
    pub fn config_source(&self) -> String {
        describe(self.config_file())
    }

    /// Read config YAML from the external file, or the embedded default
    pub fn read_config_string(&self) -> io::Result<String> {
        if let Some(path) = &self.config_file {
            return fs::read_to_string(path);
        }

        let file = EmbeddedConfig::get(CONFIG_FILE_NAME).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml missing")
        })?;
        String::from_utf8(file.data.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Extract embedded assets to the configured (or default) locations
    ///
    /// Existing files are skipped unless `force` is set.
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for category in categories {
            match category {
                AssetCategory::Static => {
                    let dir = self
                        .static_dir
                        .clone()
                        .unwrap_or_else(|| PathBuf::from("./static"));
                    fs::create_dir_all(&dir)?;

                    for file in EmbeddedStatic::iter() {
                        let path = dir.join(file.as_ref());
                        if !force && path.exists() {
                            report.skipped.push(path.display().to_string());
                            continue;
                        }
                        if let Some(data) = EmbeddedStatic::get(&file) {
                            if let Some(parent) = path.parent() {
                                fs::create_dir_all(parent)?;
                            }
                            fs::write(&path, &*data.data)?;
                            report.written.push(path.display().to_string());
                        }
                    }
                }
                AssetCategory::Config => {
                    let path = self
                        .config_file
                        .clone()
                        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
                    if !force && path.exists() {
                        report.skipped.push(path.display().to_string());
                        continue;
                    }
                    if let Some(data) = EmbeddedConfig::get(CONFIG_FILE_NAME) {
                        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                            fs::create_dir_all(parent)?;
                        }
                        fs::write(&path, &*data.data)?;
                        report.written.push(path.display().to_string());
                    }
                }
            }
        }

        Ok(report)
    }

    /// Names of the embedded assets in a category, sorted
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        match category {
            AssetCategory::Static => {
                let mut files: Vec<String> =
                    EmbeddedStatic::iter().map(|f| f.to_string()).collect();
                files.sort();
                files
            }
            AssetCategory::Config => vec![CONFIG_FILE_NAME.to_string()],
        }
    }

    /// Look up an embedded static file by request path
    ///
    /// Directory paths resolve to their `index.html`. Paths containing `..`
    /// never match.
    pub fn embedded_static(path: &str) -> Option<Cow<'static, [u8]>> {
        let mut candidate = path.trim_start_matches('/').to_string();
        if candidate.split('/').any(|segment| segment == "..") {
            return None;
        }
        if candidate.is_empty() || candidate.ends_with('/') {
            candidate.push_str(INDEX_FILE_NAME);
        }
        EmbeddedStatic::get(&candidate).map(|file| file.data)
    }
}

fn describe(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "embedded".to_string())
}

/// Fallback handler serving the embedded drawing site
pub async fn serve_embedded(method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return ApiError::MethodNotAllowed.into_response();
    }

    let path = uri.path();
    let Some(contents) = AssetLoader::embedded_static(path) else {
        return ApiError::NotFound.into_response();
    };

    let name = if path.ends_with('/') {
        INDEX_FILE_NAME
    } else {
        path
    };
    let mime = mime_guess::from_path(name).first_or_octet_stream();

    let mut response = Response::new(Body::from(contents.into_owned()));
    *response.status_mut() = StatusCode::OK;
    if let Ok(value) = HeaderValue::from_str(mime.as_ref()) {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    response
}
