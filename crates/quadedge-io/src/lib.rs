//! quadedge-io - Image file I/O
//!
//! Reads any image the `image` crate can decode (BMP and PNG are enabled)
//! into a [`GrayBuffer`] of luma values, and writes a [`GrayBuffer`] back
//! as an 8-bit grayscale image. The output format follows the file
//! extension.
//!
//! Color input is reduced to luma on read; values outside `0..=255` are
//! clamped on write.

mod error;

pub use error::{IoError, IoResult};

use image::{GrayImage, Luma};
use log::debug;
use quadedge_core::GrayBuffer;
use std::path::Path;

/// Read an image file into a gray buffer.
///
/// # Errors
///
/// Returns [`IoError::Image`] if the file cannot be opened or decoded.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<GrayBuffer> {
    let path = path.as_ref();
    let luma = image::open(path)
        .map_err(|source| IoError::Image {
            path: path.display().to_string(),
            source,
        })?
        .into_luma8();
    debug!(
        "read {} ({}x{})",
        path.display(),
        luma.width(),
        luma.height()
    );
    gray_from_luma(&luma)
}

/// Write a gray buffer to an image file.
///
/// # Errors
///
/// Returns [`IoError::Image`] if the extension is not a supported format
/// or encoding fails.
pub fn write_image<P: AsRef<Path>>(buffer: &GrayBuffer, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let luma = luma_from_gray(buffer)?;
    luma.save(path).map_err(|source| IoError::Image {
        path: path.display().to_string(),
        source,
    })?;
    debug!(
        "wrote {} ({}x{})",
        path.display(),
        buffer.width(),
        buffer.height()
    );
    Ok(())
}

/// Convert an 8-bit luma image into a gray buffer.
///
/// # Errors
///
/// Returns [`IoError::Core`] for an image with a zero dimension.
pub fn gray_from_luma(luma: &GrayImage) -> IoResult<GrayBuffer> {
    let data = luma.as_raw().iter().map(|&v| i32::from(v)).collect();
    Ok(GrayBuffer::from_vec(luma.width(), luma.height(), data)?)
}

/// Convert a gray buffer into an 8-bit luma image, clamping to `0..=255`.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] if the buffer cannot back an image.
pub fn luma_from_gray(buffer: &GrayBuffer) -> IoResult<GrayImage> {
    let mut luma = GrayImage::new(buffer.width(), buffer.height());
    if luma.as_raw().len() != buffer.len() {
        return Err(IoError::InvalidData(format!(
            "cannot allocate {}x{} luma image",
            buffer.width(),
            buffer.height()
        )));
    }
    for (dst, &v) in luma.pixels_mut().zip(buffer.data()) {
        *dst = Luma([v.clamp(0, 255) as u8]);
    }
    Ok(luma)
}
