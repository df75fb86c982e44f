//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to encode or write a PNG dump
    #[error("failed to write image '{path}': {message}")]
    ImageWrite { path: String, message: String },

    /// Failed to read back a PNG dump or golden file
    #[error("failed to read image '{path}': {message}")]
    ImageRead { path: String, message: String },

    /// Failed to create directory
    #[error("failed to create directory '{path}': {message}")]
    DirectoryCreate { path: String, message: String },

    /// Rendered buffers disagree with the stated dimensions
    #[error("buffer size mismatch: {width}x{height} needs {required} entries, got {actual}")]
    SizeMismatch {
        width: u32,
        height: u32,
        required: usize,
        actual: usize,
    },

    /// Golden file not found
    #[error("golden file not found: {path}")]
    GoldenNotFound { path: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
