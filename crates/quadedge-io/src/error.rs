//! I/O error types
//!
//! Decoder, encoder and filesystem failures all surface through the
//! `image` crate and are wrapped with the offending path.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// The `image` crate failed to decode or encode
    #[error("image error for '{path}': {source}")]
    Image {
        /// File being read or written
        path: String,
        /// Underlying decoder/encoder error
        #[source]
        source: image::ImageError,
    },

    /// The image data is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] quadedge_core::CoreError),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
