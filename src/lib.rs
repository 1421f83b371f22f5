//! Strokepad
//!
//! HTTP service that turns freehand pen strokes into 28x28 images for
//! handwritten character classifiers.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
