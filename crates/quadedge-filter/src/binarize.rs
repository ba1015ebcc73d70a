//! Binarization pre-pass for the neighbor-majority detector
//!
//! Every value above the threshold becomes `1`, everything else `0`. The
//! pass runs on one thread over the whole buffer and finishes before any
//! filter task reads it.
//!
//! The result is wrapped in [`BinaryBuffer`] so the neighbor-majority pass
//! only ever sees thresholded data. Binarizing a [`BinaryBuffer`] again
//! returns it unchanged: with the raw rule a second pass would turn every
//! `1` into `0` for any threshold of 1 or more.

use quadedge_core::GrayBuffer;

/// Buffer whose values are all `0` or `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryBuffer {
    inner: GrayBuffer,
}

impl BinaryBuffer {
    /// Borrow the underlying buffer
    #[inline]
    pub fn as_gray(&self) -> &GrayBuffer {
        &self.inner
    }

    /// Number of `1` pixels
    pub fn count_foreground(&self) -> usize {
        self.inner.count_nonzero()
    }
}

/// Threshold to `{0, 1}`.
pub trait Binarize {
    /// Binarize against `threshold`.
    fn binarize(self, threshold: i32) -> BinaryBuffer;
}

impl Binarize for GrayBuffer {
    fn binarize(mut self, threshold: i32) -> BinaryBuffer {
        binarize_in_place(&mut self, threshold);
        BinaryBuffer { inner: self }
    }
}

impl Binarize for BinaryBuffer {
    fn binarize(self, _threshold: i32) -> BinaryBuffer {
        self
    }
}

/// Rewrite every value as `1` if it exceeds `threshold`, else `0`.
pub fn binarize_in_place(buffer: &mut GrayBuffer, threshold: i32) {
    for v in buffer.data_mut() {
        *v = i32::from(*v > threshold);
    }
}
