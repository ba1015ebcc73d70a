//! Error types for quadedge-core
//!
//! Every fallible operation in the core crate reports one of these
//! variants. Geometry violations inside the quadrant recursion are not
//! represented here: they are internal bugs and are caught by tests.

use thiserror::Error;

/// quadedge core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Invalid buffer dimensions
    #[error("invalid buffer dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Buffer length does not match its dimensions
    #[error("buffer length {len} does not match {width}x{height}")]
    LengthMismatch { len: usize, width: u32, height: u32 },

    /// Two buffers (or a buffer and a region) disagree on dimensions
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Image cannot hold a single full kernel window
    #[error("image {width}x{height} is too small for a {filter_size}x{filter_size} window")]
    ImageTooSmall {
        width: u32,
        height: u32,
        filter_size: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;
