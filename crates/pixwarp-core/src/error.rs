//! Error types for pixwarp-core
//!
//! All checks in this crate happen when a view or area is constructed,
//! never per pixel. Once a [`SourceImage`](crate::SourceImage) or
//! [`Area`](crate::Area) exists, every access through it is in bounds.

use thiserror::Error;

/// pixwarp-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },

    /// Row stride shorter than the row itself
    #[error("stride {stride} is smaller than width {width}")]
    InvalidStride { stride: i32, width: i32 },

    /// Pixel buffer cannot hold the described image
    #[error("buffer too small: need {required} bytes, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },

    /// Area corners in the wrong order
    #[error("inverted area: ({x1}, {y1}) .. ({x2}, {y2})")]
    InvertedArea { x1: i32, y1: i32, x2: i32, y2: i32 },
}

/// Result type alias for pixwarp-core operations
pub type Result<T> = std::result::Result<T, Error>;
