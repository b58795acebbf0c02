//! hocr-grid - table reconstruction from hOCR line bounding boxes.
//!
//! OCR output has no notion of rows or columns, only text lines with pixel
//! geometry. This crate clusters line positions on each axis and pivots the
//! result into a rectangular grid of cell text.

pub mod api;
pub mod error;
pub mod export;
pub mod hocr;
pub mod table;

// Re-export high_level for convenience
pub use api::high_level;

pub use error::{GridError, Result};
pub use table::{Grid, GridParams, LineRecord};
