//! stroke-raster: render freehand pen strokes into small raster images
//!
//! This crate turns vector stroke data (pen-down to pen-up paths captured as
//! coordinate lists) into a fixed-size image suitable as classifier input,
//! e.g. 28×28 handwritten digit recognition.
//!
//! # Quick Start
//!
//! ```
//! use stroke_raster::{BoundingBox, Stroke, StrokeRenderer};
//!
//! let strokes = vec![Stroke::new(vec![10.0, 90.0], vec![10.0, 90.0])];
//! let bbox = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
//!
//! let image = StrokeRenderer::default().render(&strokes, &bbox).unwrap();
//!
//! assert_eq!(image.width(), 28);
//! assert_eq!(image.height(), 28);
//! ```
//!
//! # Pipeline
//!
//! 1. The bounding box is validated and converted to a canvas size
//!    (`floor(x_max - x_min)` by `floor(y_max - y_min)`). Nothing is
//!    allocated for a degenerate box.
//! 2. Every stroke is validated (equal-length coordinate sequences, finite
//!    values).
//! 3. Strokes are translated into box space and stroked in black onto a
//!    white canvas. Points outside the box are clipped.
//! 4. The canvas is resampled to the output size with a deterministic filter.
//!
//! Rendering is pure: no I/O, no shared state, identical inputs produce
//! pixel-identical output.

pub mod error;
pub mod geometry;
pub mod options;
pub mod raster;
pub mod render;
pub mod stroke;

mod resample;


pub use error::RasterError;
pub use geometry::{validate_padding, BoundingBox, CanvasSize};
pub use options::{LineCap, LineJoin, RenderOptions, ResizeFilter, DEFAULT_OUTPUT_SIZE};
pub use raster::RasterImage;
pub use render::{render, StrokeRenderer};
pub use stroke::Stroke;
