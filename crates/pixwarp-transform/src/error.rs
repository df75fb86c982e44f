//! Error types for pixwarp-transform

use thiserror::Error;

/// Errors that can occur while setting up a transformed draw
///
/// All of these are detected before the first row is sampled; the
/// per-pixel path has no failure modes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixwarp_core::Error),

    /// Zoom of zero has no inverse
    #[error("invalid zoom: 0")]
    InvalidZoom,

    /// Destination area covers no pixels
    #[error("empty destination area: {width}x{height}")]
    EmptyArea { width: i32, height: i32 },

    /// Output color or alpha buffer shorter than the destination
    #[error("output buffer too small: need {required} entries, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
